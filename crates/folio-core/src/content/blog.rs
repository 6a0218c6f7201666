use chrono::NaiveDate;

/// One blog listing entry. There is no post body; entries link out to the
/// external blog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// ISO date, e.g. "2024-01-15"
    pub date: &'static str,
    pub read_minutes: u16,
    pub category: &'static str,
    pub featured: bool,
}

impl BlogPost {
    /// Parsed publication date. Dates in the table are static and valid.
    pub fn published(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }
}

pub const CATEGORIES: &[&str] = &[
    "All",
    "DevOps",
    "Infrastructure",
    "Monitoring",
    "CI/CD",
    "Security",
    "Cloud",
];

pub const POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        title: "Building Scalable Kubernetes Clusters on AWS",
        excerpt: "Learn how to design and implement production-ready Kubernetes clusters using \
            AWS EKS with best practices for security, monitoring, and cost optimization.",
        date: "2024-01-15",
        read_minutes: 8,
        category: "DevOps",
        featured: true,
    },
    BlogPost {
        id: 2,
        title: "Infrastructure as Code with Terraform: A Complete Guide",
        excerpt: "Master the fundamentals of Infrastructure as Code using Terraform, including \
            state management, modules, and multi-cloud deployments.",
        date: "2024-01-08",
        read_minutes: 12,
        category: "Infrastructure",
        featured: false,
    },
    BlogPost {
        id: 3,
        title: "Monitoring Microservices with Prometheus and Grafana",
        excerpt: "Set up comprehensive monitoring for your microservices architecture using \
            Prometheus for metrics collection and Grafana for visualization.",
        date: "2024-01-01",
        read_minutes: 10,
        category: "Monitoring",
        featured: false,
    },
    BlogPost {
        id: 4,
        title: "CI/CD Best Practices for Cloud-Native Applications",
        excerpt: "Discover proven strategies for implementing continuous integration and \
            deployment pipelines that scale with your cloud-native applications.",
        date: "2023-12-20",
        read_minutes: 15,
        category: "CI/CD",
        featured: true,
    },
    BlogPost {
        id: 5,
        title: "Security First: Implementing Zero-Trust Architecture",
        excerpt: "Learn how to implement zero-trust security principles in your cloud \
            infrastructure to protect against modern threats.",
        date: "2023-12-10",
        read_minutes: 9,
        category: "Security",
        featured: false,
    },
    BlogPost {
        id: 6,
        title: "Cost Optimization Strategies for AWS Workloads",
        excerpt: "Practical techniques to reduce your AWS bill while maintaining performance and \
            reliability in production environments.",
        date: "2023-11-28",
        read_minutes: 7,
        category: "Cloud",
        featured: false,
    },
];

/// All posts, newest first (the table is kept in that order).
pub fn all() -> &'static [BlogPost] {
    POSTS
}

/// Posts in a category; "All" returns everything.
pub fn by_category(category: &str) -> Vec<&'static BlogPost> {
    POSTS
        .iter()
        .filter(|p| category == "All" || p.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_category() {
        assert_eq!(by_category("All").len(), POSTS.len());
    }

    #[test]
    fn test_single_category() {
        let security = by_category("Security");
        assert_eq!(security.len(), 1);
        assert_eq!(security[0].id, 5);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        assert!(by_category("Gardening").is_empty());
    }

    #[test]
    fn test_dates_parse() {
        for post in POSTS {
            assert!(post.published().is_some(), "bad date on post {}", post.id);
        }
    }

    #[test]
    fn test_posts_newest_first() {
        let dates: Vec<_> = POSTS.iter().map(|p| p.published().unwrap()).collect();
        for pair in dates.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }
}
