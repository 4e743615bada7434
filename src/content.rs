//! Static page content. Everything here is literal data baked in at compile
//! time; the listing sections wrap the tagged types in a
//! [`crate::catalog::Catalog`] and the rest is rendered as-is.

use chrono::{Months, NaiveDate};

use crate::catalog::Tagged;

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub tags: Vec<String>,
    pub language: String,
    pub stars: u32,
    pub forks: u32,
    pub updated: NaiveDate,
    pub repo_url: String,
    pub homepage: Option<String>,
    pub featured: bool,
    pub period: String,
    pub role: String,
}

impl Tagged for Project {
    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn featured(&self) -> bool {
        self.featured
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub category: String,
    pub issued: NaiveDate,
    pub expires: NaiveDate,
    pub credential_id: String,
    pub credential_url: String,
    pub description: String,
    pub icon: String,
    pub skills: Vec<String>,
}

impl Tagged for Certification {
    // certifications filter on their single category
    fn tags(&self) -> &[String] {
        std::slice::from_ref(&self.category)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub published: NaiveDate,
    pub read_time: String,
    pub tags: Vec<String>,
    pub category: String,
    pub featured: bool,
    pub views: u32,
    pub likes: u32,
}

impl Tagged for BlogPost {
    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn featured(&self) -> bool {
        self.featured
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub kind: String,
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
    pub description: String,
    pub technologies: Vec<String>,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub gpa: String,
    pub achievements: Vec<String>,
    pub coursework: Vec<String>,
    pub thesis: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroup {
    pub category: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactDetail {
    pub label: String,
    pub value: String,
    pub href: String,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// "Expiring Soon" badge window: the expiry falls within six calendar months
/// of `today` (already-expired counts too). Decorative only.
pub fn expiring_soon(expiry: NaiveDate, today: NaiveDate) -> bool {
    let cutoff = today
        .checked_add_months(Months::new(6))
        .unwrap_or(NaiveDate::MAX);
    expiry <= cutoff
}

/// "Mar 2024" style label for timeline ranges; `None` means ongoing.
pub fn format_month(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%b %Y").to_string(),
        None => "Present".to_string(),
    }
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            name: "Student Management System".to_string(),
            description: "Comprehensive student management platform with user authentication, grade tracking, course management, and administrative dashboard."
                .to_string(),
            technologies: strings(&["React", "Node.js", "MongoDB", "Express", "JWT", "TailwindCSS"]),
            tags: strings(&["Full-Stack", "Web"]),
            language: "JavaScript".to_string(),
            stars: 12,
            forks: 5,
            updated: date(2024, 11, 15),
            repo_url: "https://github.com/saivamsi4514/empower-student-path".to_string(),
            homepage: Some("https://empower-student-path.example.com".to_string()),
            featured: true,
            period: "2024".to_string(),
            role: "Full-Stack Developer".to_string(),
        },
        Project {
            name: "Task Management System".to_string(),
            description: "Feature-rich task management application with real-time collaboration, project tracking, team management, and analytics dashboard."
                .to_string(),
            technologies: strings(&["React", "TypeScript", "Node.js", "Socket.io", "PostgreSQL", "Redux"]),
            tags: strings(&["Full-Stack", "Web", "Real-time"]),
            language: "TypeScript".to_string(),
            stars: 18,
            forks: 8,
            updated: date(2024, 10, 20),
            repo_url: "https://github.com/saivamsi4514/agenda-swift-sync".to_string(),
            homepage: Some("https://agenda-swift-sync.example.com".to_string()),
            featured: true,
            period: "2024".to_string(),
            role: "Full-Stack Developer".to_string(),
        },
        Project {
            name: "Resume Builder".to_string(),
            description: "Interactive resume builder with multiple templates, real-time preview, PDF export, and ATS optimization."
                .to_string(),
            technologies: strings(&["React", "CSS3", "jsPDF", "HTML2Canvas", "LocalStorage"]),
            tags: strings(&["Web"]),
            language: "JavaScript".to_string(),
            stars: 25,
            forks: 12,
            updated: date(2024, 9, 30),
            repo_url: "https://github.com/saivamsi4514/resume-builder".to_string(),
            homepage: Some("https://resume-builder.example.com".to_string()),
            featured: true,
            period: "2024".to_string(),
            role: "Frontend Developer".to_string(),
        },
        Project {
            name: "Crypto Dashboard".to_string(),
            description: "Real-time cryptocurrency tracking dashboard with market analytics, portfolio management, price alerts, and historical data visualization."
                .to_string(),
            technologies: strings(&["React", "Chart.js", "REST APIs", "WebSocket", "Material-UI"]),
            tags: strings(&["Web", "Real-time", "Data"]),
            language: "JavaScript".to_string(),
            stars: 20,
            forks: 10,
            updated: date(2024, 8, 15),
            repo_url: "https://github.com/saivamsi4514/crypto-dashborad".to_string(),
            homepage: Some("https://crypto-dashboard.example.com".to_string()),
            featured: true,
            period: "2024".to_string(),
            role: "Frontend Developer".to_string(),
        },
        Project {
            name: "Automated Detection of Structural Anomalies".to_string(),
            description: "Automated system for early detection of structural anomalies using image segmentation. YOLO-based detection, tracking, and segmentation of cracks, potholes, and corrosion."
                .to_string(),
            technologies: strings(&["Python", "YOLO", "Computer Vision", "Image Segmentation"]),
            tags: strings(&["AI/ML", "Research"]),
            language: "Python".to_string(),
            stars: 8,
            forks: 3,
            updated: date(2024, 12, 1),
            repo_url: "https://github.com/saivamsi4514/structural-anomaly-detection".to_string(),
            homepage: None,
            featured: false,
            period: "2024".to_string(),
            role: "Research Project Lead".to_string(),
        },
        Project {
            name: "Diabetes Prediction System".to_string(),
            description: "Integrated ensemble model (XNN + LGBM) for diabetes prediction with a Flask API backend and a health metrics dashboard."
                .to_string(),
            technologies: strings(&["Python", "XNN", "LGBM", "Flask", "HTML", "CSS"]),
            tags: strings(&["AI/ML", "Research"]),
            language: "Python".to_string(),
            stars: 6,
            forks: 2,
            updated: date(2024, 5, 1),
            repo_url: "https://github.com/saivamsi4514/diabetes-prediction".to_string(),
            homepage: None,
            featured: false,
            period: "Feb 2024 - May 2024".to_string(),
            role: "Project Lead".to_string(),
        },
        Project {
            name: "Amazon Sales Data Analysis".to_string(),
            description: "Analysis of Amazon sales data covering units sold and revenue, with category-level product breakdowns and review-feedback insights."
                .to_string(),
            technologies: strings(&["Python", "Pandas", "Data Analysis"]),
            tags: strings(&["Data", "Research"]),
            language: "Python".to_string(),
            stars: 4,
            forks: 1,
            updated: date(2024, 4, 1),
            repo_url: "https://github.com/saivamsi4514/amazon-sales-analysis".to_string(),
            homepage: None,
            featured: false,
            period: "April 2024".to_string(),
            role: "Data Analyst".to_string(),
        },
    ]
}

pub fn certifications() -> Vec<Certification> {
    vec![
        Certification {
            title: "AWS Certified Solutions Architect - Professional".to_string(),
            issuer: "Amazon Web Services".to_string(),
            category: "Cloud".to_string(),
            issued: date(2023, 8, 15),
            expires: date(2026, 8, 15),
            credential_id: "AWS-PSA-123456789".to_string(),
            credential_url: "https://aws.amazon.com/verification".to_string(),
            description: "Advanced certification demonstrating expertise in designing distributed applications and systems on AWS."
                .to_string(),
            icon: "🔶".to_string(),
            skills: strings(&["AWS Architecture", "Cloud Security", "Cost Optimization", "Disaster Recovery"]),
        },
        Certification {
            title: "Google Cloud Professional ML Engineer".to_string(),
            issuer: "Google Cloud".to_string(),
            category: "ML/AI".to_string(),
            issued: date(2023, 6, 20),
            expires: date(2025, 6, 20),
            credential_id: "GCP-MLE-987654321".to_string(),
            credential_url: "https://cloud.google.com/certification".to_string(),
            description: "Professional certification for designing and implementing ML solutions using Google Cloud technologies."
                .to_string(),
            icon: "🤖".to_string(),
            skills: strings(&["Machine Learning", "TensorFlow", "BigQuery ML", "AutoML"]),
        },
        Certification {
            title: "Certified Kubernetes Administrator (CKA)".to_string(),
            issuer: "Cloud Native Computing Foundation".to_string(),
            category: "DevOps".to_string(),
            issued: date(2023, 4, 10),
            expires: date(2026, 4, 10),
            credential_id: "CKA-567890123".to_string(),
            credential_url: "https://training.linuxfoundation.org/certification".to_string(),
            description: "Demonstrates skills in deploying, managing, and troubleshooting Kubernetes clusters."
                .to_string(),
            icon: "⚙️".to_string(),
            skills: strings(&["Kubernetes", "Container Orchestration", "Cluster Management", "Networking"]),
        },
        Certification {
            title: "Certified Ethical Hacker (CEH)".to_string(),
            issuer: "EC-Council".to_string(),
            category: "Security".to_string(),
            issued: date(2022, 11, 15),
            expires: date(2025, 11, 15),
            credential_id: "CEH-234567890".to_string(),
            credential_url: "https://www.eccouncil.org/programs/certified-ethical-hacker-ceh/".to_string(),
            description: "Validates skills in identifying vulnerabilities and weaknesses in target systems."
                .to_string(),
            icon: "🔒".to_string(),
            skills: strings(&["Penetration Testing", "Vulnerability Assessment", "Network Security", "Web Security"]),
        },
        Certification {
            title: "Microsoft Azure AI Engineer Associate".to_string(),
            issuer: "Microsoft".to_string(),
            category: "ML/AI".to_string(),
            issued: date(2023, 3, 8),
            expires: date(2025, 3, 8),
            credential_id: "AZURE-AI-345678901".to_string(),
            credential_url: "https://docs.microsoft.com/en-us/learn/certifications/".to_string(),
            description: "Demonstrates ability to implement AI solutions on the Microsoft Azure platform."
                .to_string(),
            icon: "🧠".to_string(),
            skills: strings(&["Azure AI", "Cognitive Services", "Bot Framework", "Computer Vision"]),
        },
        Certification {
            title: "React Developer Certification".to_string(),
            issuer: "Meta".to_string(),
            category: "Web Dev".to_string(),
            issued: date(2023, 1, 20),
            expires: date(2025, 1, 20),
            credential_id: "META-REACT-456789012".to_string(),
            credential_url: "https://developers.facebook.com/certification/".to_string(),
            description: "Professional certification demonstrating advanced React development skills."
                .to_string(),
            icon: "⚛️".to_string(),
            skills: strings(&["React", "JSX", "Hooks", "State Management", "Testing"]),
        },
        Certification {
            title: "Docker Certified Associate".to_string(),
            issuer: "Docker Inc.".to_string(),
            category: "DevOps".to_string(),
            issued: date(2022, 9, 12),
            expires: date(2024, 9, 12),
            credential_id: "DOCKER-DCA-567890123".to_string(),
            credential_url: "https://training.mirantis.com/dca-certification-exam/".to_string(),
            description: "Validates skills in containerization and Docker ecosystem technologies."
                .to_string(),
            icon: "🐳".to_string(),
            skills: strings(&["Docker", "Containerization", "Docker Compose", "Container Security"]),
        },
        Certification {
            title: "CISSP - Certified Information Systems Security Professional".to_string(),
            issuer: "(ISC)²".to_string(),
            category: "Security".to_string(),
            issued: date(2022, 7, 25),
            expires: date(2025, 7, 25),
            credential_id: "CISSP-678901234".to_string(),
            credential_url: "https://www.isc2.org/Certifications/CISSP".to_string(),
            description: "Advanced certification for experienced security professionals demonstrating expertise across 8 domains."
                .to_string(),
            icon: "🛡️".to_string(),
            skills: strings(&["Security Architecture", "Risk Management", "Identity Management", "Cryptography"]),
        },
    ]
}

pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            title: "Building Scalable AI Applications with React and TensorFlow.js".to_string(),
            excerpt: "Learn how to integrate machine learning models directly into React applications for real-time AI-powered user experiences."
                .to_string(),
            author: "Sai Vamsi Cheekati".to_string(),
            published: date(2024, 1, 15),
            read_time: "8 min read".to_string(),
            tags: strings(&["AI/ML", "React", "TensorFlow", "Web Development"]),
            category: "AI/ML".to_string(),
            featured: true,
            views: 1247,
            likes: 89,
        },
        BlogPost {
            title: "Implementing Zero-Trust Security in SDN Architectures".to_string(),
            excerpt: "A deep dive into implementing zero-trust security models in Software-Defined Networks for enhanced cybersecurity."
                .to_string(),
            author: "Sai Vamsi Cheekati".to_string(),
            published: date(2024, 1, 10),
            read_time: "12 min read".to_string(),
            tags: strings(&["Cybersecurity", "SDN", "Network Security", "Zero Trust"]),
            category: "Cybersecurity".to_string(),
            featured: true,
            views: 892,
            likes: 67,
        },
        BlogPost {
            title: "Real-time Data Processing with Node.js and WebSockets".to_string(),
            excerpt: "Building high-performance real-time applications using Node.js, WebSockets, and modern streaming technologies."
                .to_string(),
            author: "Sai Vamsi Cheekati".to_string(),
            published: date(2024, 1, 5),
            read_time: "10 min read".to_string(),
            tags: strings(&["Node.js", "Real-time", "WebSockets", "Performance"]),
            category: "Full Stack".to_string(),
            featured: false,
            views: 654,
            likes: 45,
        },
        BlogPost {
            title: "Deploying ML Models at Scale with Kubernetes and Docker".to_string(),
            excerpt: "A comprehensive guide to containerizing and orchestrating machine learning models for production deployment."
                .to_string(),
            author: "Sai Vamsi Cheekati".to_string(),
            published: date(2023, 12, 28),
            read_time: "15 min read".to_string(),
            tags: strings(&["AI/ML", "Kubernetes", "Docker", "DevOps"]),
            category: "DevOps".to_string(),
            featured: false,
            views: 1156,
            likes: 78,
        },
        BlogPost {
            title: "Advanced React Patterns for Large-Scale Applications".to_string(),
            excerpt: "Exploring advanced React patterns and architectural decisions for building maintainable large-scale applications."
                .to_string(),
            author: "Sai Vamsi Cheekati".to_string(),
            published: date(2023, 12, 20),
            read_time: "11 min read".to_string(),
            tags: strings(&["React", "Architecture", "JavaScript", "Frontend"]),
            category: "Frontend".to_string(),
            featured: false,
            views: 789,
            likes: 56,
        },
        BlogPost {
            title: "Microservices Architecture with GraphQL Federation".to_string(),
            excerpt: "Designing and implementing microservices architectures using GraphQL Federation for improved developer experience."
                .to_string(),
            author: "Sai Vamsi Cheekati".to_string(),
            published: date(2023, 12, 15),
            read_time: "13 min read".to_string(),
            tags: strings(&["GraphQL", "Microservices", "Backend", "API Design"]),
            category: "Backend".to_string(),
            featured: false,
            views: 923,
            likes: 62,
        },
    ]
}

pub fn experiences() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            title: "Intern".to_string(),
            company: "NIT Warangal".to_string(),
            location: "Warangal, India".to_string(),
            kind: "Internship".to_string(),
            start: date(2024, 12, 1),
            end: Some(date(2025, 4, 1)),
            description: "LDoS Attack Detection and Mitigation Using Deep Learning in SDN - implementation of deep learning models to detect and mitigate low-rate DDoS attacks in Software-Defined Networks."
                .to_string(),
            technologies: strings(&["Python", "TensorFlow", "Keras", "SDN", "Deep Learning", "Network Security"]),
            website: "https://www.nitw.ac.in".to_string(),
        },
        ExperienceEntry {
            title: "Intern".to_string(),
            company: "WISENET Automation Private Limited".to_string(),
            location: "India".to_string(),
            kind: "Internship".to_string(),
            start: date(2023, 7, 1),
            end: Some(date(2023, 8, 1)),
            description: "4G GPS asset tracker website - developed the tracker site and performed comprehensive website and server testing."
                .to_string(),
            technologies: strings(&["Web Development", "Web Design", "Data Analytics", "Testing", "GPS Tracking"]),
            website: "https://wisenet.com".to_string(),
        },
    ]
}

pub fn education() -> Vec<EducationEntry> {
    vec![
        EducationEntry {
            degree: "B.Tech in Computer Science - Artificial Intelligence and Data Science"
                .to_string(),
            institution: "GMR Institute of Technology".to_string(),
            location: "Srikakulam, India".to_string(),
            start: date(2021, 7, 1),
            end: date(2025, 6, 1),
            gpa: "8.5/10.0".to_string(),
            achievements: strings(&[
                "Current GPA: 8.5/10.0",
                "Research Project Lead in Structural Anomaly Detection",
                "Active participant in technical projects and internships",
            ]),
            coursework: strings(&[
                "Machine Learning",
                "Data Science",
                "Computer Vision",
                "Software Engineering",
                "Database Management",
                "Algorithms",
            ]),
            thesis: Some(
                "Automated Detection of Structural Anomalies Using Object Tracking Techniques"
                    .to_string(),
            ),
        },
        EducationEntry {
            degree: "Class XII - High School Certification".to_string(),
            institution: "Narayana Junior College, Andhra Pradesh Board".to_string(),
            location: "Andhra Pradesh, India".to_string(),
            start: date(2019, 6, 1),
            end: date(2020, 5, 1),
            gpa: "8.38 GPA".to_string(),
            achievements: strings(&[
                "Scored 8.38 GPA in Class XII",
                "Merit student at Narayana Junior College",
                "Strong foundation in Mathematics and Physics",
            ]),
            coursework: strings(&["Physics", "Chemistry", "Mathematics", "Computer Science", "English"]),
            thesis: None,
        },
        EducationEntry {
            degree: "Class X - Secondary School Certification".to_string(),
            institution: "MPEV School, CBSE Board".to_string(),
            location: "India".to_string(),
            start: date(2017, 4, 1),
            end: date(2018, 5, 1),
            gpa: "8.0 CGPA".to_string(),
            achievements: strings(&[
                "Scored 8.0 CGPA in Class X",
                "All-round excellence in academics",
                "Strong performance in Mathematics and Science",
            ]),
            coursework: strings(&["Mathematics", "Science", "Social Studies", "English", "Hindi"]),
            thesis: None,
        },
    ]
}

pub fn skill_groups() -> Vec<SkillGroup> {
    vec![
        SkillGroup {
            category: "Frontend Development".to_string(),
            technologies: strings(&["React", "TypeScript", "Next.js", "Vue.js", "TailwindCSS"]),
        },
        SkillGroup {
            category: "Backend & APIs".to_string(),
            technologies: strings(&["Node.js", "Python", "Express", "FastAPI", "GraphQL", "REST APIs"]),
        },
        SkillGroup {
            category: "AI & Machine Learning".to_string(),
            technologies: strings(&["TensorFlow", "PyTorch", "Scikit-learn", "Computer Vision", "NLP"]),
        },
        SkillGroup {
            category: "Database & Cloud".to_string(),
            technologies: strings(&["MongoDB", "PostgreSQL", "Redis", "AWS", "Docker", "Kubernetes"]),
        },
        SkillGroup {
            category: "Cybersecurity & SDN".to_string(),
            technologies: strings(&["Network Security", "SDN Controllers", "Penetration Testing", "SIEM"]),
        },
        SkillGroup {
            category: "Real-time Systems".to_string(),
            technologies: strings(&["WebSocket", "Socket.io", "Message Queues", "Event Streaming"]),
        },
    ]
}

pub fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            label: "GitHub".to_string(),
            url: "https://github.com/saivamsi4514/".to_string(),
            icon: "devicon-github-plain".to_string(),
        },
        SocialLink {
            label: "LinkedIn".to_string(),
            url: "https://www.linkedin.com/in/sai-vamsi-ch/".to_string(),
            icon: "devicon-linkedin-plain".to_string(),
        },
    ]
}

pub fn contact_details() -> Vec<ContactDetail> {
    vec![
        ContactDetail {
            label: "Email".to_string(),
            value: "saivamsicheekati@gmail.com".to_string(),
            href: "mailto:saivamsicheekati@gmail.com".to_string(),
        },
        ContactDetail {
            label: "Phone".to_string(),
            value: "+91 70378 74 78".to_string(),
            href: "tel:+917037874778".to_string(),
        },
        ContactDetail {
            label: "Location".to_string(),
            value: "Vizianagaram, India".to_string(),
            href: "https://maps.google.com/?q=Vizianagaram,India".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ALL_TAG};

    #[test]
    fn test_expiring_soon_window() {
        let today = date(2024, 6, 1);
        // inside the six-month window
        assert!(expiring_soon(date(2024, 12, 1), today));
        // already expired still flags
        assert!(expiring_soon(date(2024, 1, 1), today));
        // one day past the window does not
        assert!(!expiring_soon(date(2024, 12, 2), today));
        assert!(!expiring_soon(date(2026, 1, 1), today));
    }

    #[test]
    fn test_expiring_soon_handles_month_end() {
        // Aug 31 + 6 months clamps to Feb 28
        let today = date(2024, 8, 31);
        assert!(expiring_soon(date(2025, 2, 28), today));
        assert!(!expiring_soon(date(2025, 3, 1), today));
    }

    #[test]
    fn test_format_month() {
        assert_eq!(format_month(Some(date(2024, 12, 1))), "Dec 2024");
        assert_eq!(format_month(None), "Present");
    }

    #[test]
    fn test_project_catalog_builds_expected_index() {
        let catalog = Catalog::new(projects());
        assert_eq!(catalog.tags()[0], ALL_TAG);
        assert!(catalog.tags().iter().any(|t| t == "Full-Stack"));
        assert!(catalog.tags().iter().any(|t| t == "AI/ML"));
        // every project carries at least one tag
        assert!(catalog.items().iter().all(|p| !p.tags.is_empty()));
    }

    #[test]
    fn test_certification_catalog_filters_by_category() {
        let mut catalog = Catalog::new(certifications());
        catalog.select_tag("Security").unwrap();
        let visible = catalog.visible();
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|c| c.category == "Security"));
    }

    #[test]
    fn test_blog_catalog_partitions_featured_teasers() {
        let catalog = Catalog::new(blog_posts());
        let (featured, regular) = catalog.visible_partitioned();
        assert_eq!(featured.len(), 2);
        assert_eq!(featured.len() + regular.len(), catalog.items().len());
    }

    #[test]
    fn test_static_sections_are_populated() {
        assert!(!experiences().is_empty());
        assert!(!education().is_empty());
        assert!(!skill_groups().is_empty());
        assert!(!social_links().is_empty());
        assert!(!contact_details().is_empty());
    }
}
