/// One showcased project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub tech: &'static [&'static str],
    pub category: &'static str,
    pub demo_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
    pub blog_url: Option<&'static str>,
    pub featured: bool,
    pub year: &'static str,
    pub role: &'static str,
    pub duration: &'static str,
}

/// Filter values shown in the technology filter bar. "All" disables the
/// filter.
pub const TECHNOLOGIES: &[&str] = &[
    "All",
    "Kubernetes",
    "Docker",
    "AWS",
    "Terraform",
    "Python",
    "React",
    "Redis",
];

/// Filter values shown in the category filter bar.
pub const CATEGORIES: &[&str] = &[
    "All", "DevOps", "Cloud", "Monitoring", "Security", "Platform", "Data",
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: "kubernetes-orchestration",
        title: "Kubernetes Orchestration",
        description: "Microservices deployment on Amazon EKS with distributed voting application",
        long_description: "Deployed a comprehensive microservices application on Amazon EKS using \
            Kubernetes orchestration. The project features a distributed voting application \
            composed of multiple containers including a Python frontend, Redis for messaging, a \
            .NET worker service, and PostgreSQL database. Implemented complete CI/CD pipeline with \
            automated scaling, health checks, and monitoring.",
        tech: &[
            "Kubernetes",
            "Docker",
            "AWS EKS",
            "Python",
            ".NET",
            "Redis",
            "PostgreSQL",
        ],
        category: "DevOps",
        demo_url: None,
        github_url: Some("https://github.com/jkang1643/example-voting-app"),
        blog_url: Some(
            "https://deploydiaries.vercel.app/blog/deploy-a-microservices-application-on-amazon-eks-using-kubernetes",
        ),
        featured: true,
        year: "2025",
        role: "DevOps Engineer",
        duration: "2 months",
    },
    Project {
        id: "aws-infrastructure",
        title: "Cloud Resume Challenge",
        description: "Full-stack serverless resume website with real-time visitor counter",
        long_description: "Completed the Cloud Resume Challenge by building a complete serverless \
            resume website on AWS. The project features a React frontend hosted on S3 with \
            CloudFront CDN, a Python Lambda API for visitor counting, DynamoDB for data storage, \
            and automated CI/CD pipeline with GitHub Actions. Infrastructure is managed with \
            Terraform and the whole site costs less than $1/month to operate.",
        tech: &[
            "AWS Lambda",
            "S3",
            "CloudFront",
            "DynamoDB",
            "Terraform",
            "React",
            "Python",
        ],
        category: "Cloud",
        demo_url: Some("https://josephkangresume.store/"),
        github_url: Some("https://github.com/jkang1643/cloudresumechallenge"),
        blog_url: Some(
            "https://deploydiaries.vercel.app/blog/completing-the-cloud-resume-challenge-a-full-stack-devops-journey",
        ),
        featured: true,
        year: "2025",
        role: "Cloud Support Engineer",
        duration: "2 months",
    },
    Project {
        id: "containerized-voting-platform",
        title: "VoteStream - Real-time Voting Infrastructure",
        description: "Scalable microservices voting system deployed on AWS EC2 with Docker orchestration",
        long_description: "Deployed a distributed voting application on AWS EC2 using Docker \
            containerization and microservices architecture. The platform features a Python \
            frontend for voting, Redis for real-time messaging, a .NET worker service for vote \
            processing, and PostgreSQL for persistent storage, with Docker Compose for local \
            development and automated deployment scripts for AWS EC2.",
        tech: &[
            "Docker",
            "AWS EC2",
            "Python",
            ".NET",
            "Redis",
            "PostgreSQL",
            "Nginx",
        ],
        category: "DevOps",
        demo_url: None,
        github_url: Some("https://github.com/jkang1643/example-voting-app"),
        blog_url: Some(
            "https://deploydiaries.vercel.app/blog/how-to-deploy-a-simple-voting-app-on-aws-ec2-with-docker",
        ),
        featured: true,
        year: "2025",
        role: "DevOps Engineer",
        duration: "1 month",
    },
    Project {
        id: "aws-infrastructure-ecommerce",
        title: "EShopPlus: AWS E-commerce Architecture",
        description: "3-tier e-commerce application deployment on AWS EC2 with scalable architecture",
        long_description: "Deployed a comprehensive 3-tier e-commerce application on AWS EC2: a \
            presentation tier with Apache and PHP, an application tier with MariaDB, and a data \
            tier with persistent storage. Implemented automated deployment scripts, environment \
            configuration management, and security best practices including firewall \
            configuration and database access controls.",
        tech: &[
            "AWS EC2",
            "Apache",
            "PHP",
            "MariaDB",
            "Linux",
            "Shell Scripting",
        ],
        category: "Cloud",
        demo_url: None,
        github_url: Some("https://github.com/jkang1643/learning-app-ecommerce"),
        blog_url: Some(
            "https://deploydiaries.vercel.app/blog/deploying-a-3-tier-e-commerce-application-on-aws-ec2",
        ),
        featured: true,
        year: "2025",
        role: "Cloud Support Engineer",
        duration: "2 weeks",
    },
    Project {
        id: "socialapp-platform",
        title: "SocialApp - Modern Social Media Platform",
        description: "Full-stack social media platform with real-time features and a complete DevOps pipeline",
        long_description: "Built a comprehensive modern social media platform using Next.js 14, \
            React, TypeScript, and Firebase. The application features Google OAuth \
            authentication, real-time posts, image sharing, voice notes, and AI-powered features. \
            Implemented complete DevOps practices with automated CI/CD pipeline, zero-downtime \
            deployments, and cloud-native architecture.",
        tech: &[
            "Next.js",
            "React",
            "TypeScript",
            "Firebase",
            "Tailwind CSS",
            "Vercel",
        ],
        category: "Platform",
        demo_url: Some("https://myfirstsocialmediaapp.vercel.app/"),
        github_url: Some("https://github.com/jkang1643/myfirstsocialmediaapp"),
        blog_url: Some(
            "https://deploydiaries.vercel.app/blog/a-developer-s-complete-guide-to-shipping-code",
        ),
        featured: true,
        year: "2024",
        role: "Full-Stack Developer",
        duration: "3 months",
    },
];

/// All projects in display order.
pub fn all() -> &'static [Project] {
    PROJECTS
}

/// Look up a project by its id.
pub fn by_id(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// Linear-scan filter over the project table.
///
/// A technology of "All" matches everything; otherwise a project matches when
/// any of its tech tags contains the filter string (case-insensitive). A
/// category of "All" matches everything; otherwise category equality.
pub fn filter(tech: &str, category: &str) -> Vec<&'static Project> {
    let tech_lower = tech.to_lowercase();
    PROJECTS
        .iter()
        .filter(|p| {
            let tech_match = tech == "All"
                || p.tech
                    .iter()
                    .any(|t| t.to_lowercase().contains(&tech_lower));
            let category_match = category == "All" || p.category == category;
            tech_match && category_match
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_filter_is_identity() {
        assert_eq!(filter("All", "All").len(), PROJECTS.len());
    }

    #[test]
    fn test_tech_filter_is_substring_case_insensitive() {
        // "AWS" should match "AWS EKS", "AWS EC2", "AWS Lambda"
        let matched = filter("AWS", "All");
        assert!(matched.len() >= 3);
        assert!(matched.iter().all(|p| p
            .tech
            .iter()
            .any(|t| t.to_lowercase().contains("aws"))));

        // Lower-case query matches the same set
        assert_eq!(filter("aws", "All").len(), matched.len());
    }

    #[test]
    fn test_category_filter_is_exact() {
        let devops = filter("All", "DevOps");
        assert!(!devops.is_empty());
        assert!(devops.iter().all(|p| p.category == "DevOps"));

        // Categories are not substring-matched
        assert!(filter("All", "Dev").is_empty());
    }

    #[test]
    fn test_combined_filters_intersect() {
        let combined = filter("Docker", "DevOps");
        assert!(combined
            .iter()
            .all(|p| p.category == "DevOps" && p.tech.iter().any(|t| t.contains("Docker"))));
        assert!(combined.len() <= filter("Docker", "All").len());
    }

    #[test]
    fn test_by_id() {
        assert_eq!(
            by_id("aws-infrastructure").map(|p| p.title),
            Some("Cloud Resume Challenge")
        );
        assert!(by_id("nope").is_none());
    }

    #[test]
    fn test_project_ids_are_unique() {
        for (i, a) in PROJECTS.iter().enumerate() {
            for b in &PROJECTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
