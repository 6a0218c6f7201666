/// A named group of tools in the technologies gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechGroup {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

/// A professional certification shown on the expertise page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub earned: &'static str,
    pub credential_id: &'static str,
    pub verify_url: &'static str,
}

pub const GROUPS: &[TechGroup] = &[
    TechGroup {
        name: "Cloud & DevOps",
        items: &[
            "AWS",
            "Google Cloud",
            "Terraform",
            "Ansible",
            "Kubernetes",
            "Docker",
            "Jenkins",
            "Prometheus",
            "Grafana",
        ],
    },
    TechGroup {
        name: "Programming Languages",
        items: &["Python", "JavaScript", "TypeScript", "Go", "Java", "Bash"],
    },
    TechGroup {
        name: "Frameworks & Tools",
        items: &["React", "Next.js", "Node.js", "Git", "GitHub Actions", "Helm"],
    },
    TechGroup {
        name: "Data & Messaging",
        items: &["PostgreSQL", "Redis", "DynamoDB", "Elasticsearch", "Apache Kafka"],
    },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "AWS Certified Solutions Architect - Associate (SAA-C03)",
        issuer: "Amazon Web Services",
        earned: "March 2025",
        credential_id: "SAA-C03",
        verify_url: "https://www.credly.com/badges/b5acf9a4-5f9a-4e42-abf3-453af20afab6",
    },
    Certification {
        name: "AWS Certified Cloud Practitioner (CLF-C02)",
        issuer: "Amazon Web Services",
        earned: "August 2024",
        credential_id: "CLF-C02",
        verify_url: "https://www.credly.com/earner/earned/badge/f1a0ad8c-e609-45c8-a437-62d0301fecef",
    },
];

pub fn groups() -> &'static [TechGroup] {
    GROUPS
}

pub fn certifications() -> &'static [Certification] {
    CERTIFICATIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_are_populated() {
        assert!(!GROUPS.is_empty());
        for group in GROUPS {
            assert!(!group.items.is_empty(), "{} is empty", group.name);
        }
    }
}
