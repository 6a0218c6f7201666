/// One step of an expertise walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkthroughStep {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub duration: &'static str,
}

/// One expertise area with its walkthrough and headline achievements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpertiseArea {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub experience: &'static str,
    pub level: &'static str,
    pub steps: &'static [WalkthroughStep],
    pub achievements: &'static [&'static str],
}

pub const AREAS: &[ExpertiseArea] = &[
    ExpertiseArea {
        id: "cloud-architecture",
        title: "Cloud Architecture",
        summary: "Designing and implementing scalable cloud solutions across AWS, GCP, and Azure",
        experience: "5+ years",
        level: "Expert",
        steps: &[
            WalkthroughStep {
                title: "Multi-Cloud Strategy",
                description: "Designing hybrid and multi-cloud architectures for optimal performance and cost efficiency",
                technologies: &["AWS", "GCP", "Azure", "Terraform"],
                duration: "2-3 months",
            },
            WalkthroughStep {
                title: "Infrastructure as Code",
                description: "Automating infrastructure provisioning and management using Terraform and CloudFormation",
                technologies: &["Terraform", "CloudFormation", "Ansible"],
                duration: "1-2 months",
            },
            WalkthroughStep {
                title: "Cost Optimization",
                description: "Implementing cost monitoring, rightsizing, and automated scaling strategies",
                technologies: &["CloudWatch", "Cost Explorer", "Auto Scaling"],
                duration: "1 month",
            },
            WalkthroughStep {
                title: "Security & Compliance",
                description: "Implementing security best practices and compliance frameworks",
                technologies: &["IAM", "VPC", "Security Groups", "WAF"],
                duration: "2-3 months",
            },
        ],
        achievements: &[
            "Reduced cloud costs by 40% through rightsizing and reserved instances",
            "Achieved 99.99% uptime with automated failover systems",
            "Implemented zero-trust security architecture",
        ],
    },
    ExpertiseArea {
        id: "container-orchestration",
        title: "Container Orchestration",
        summary: "Building and managing containerized applications with Kubernetes and Docker",
        experience: "4+ years",
        level: "Expert",
        steps: &[
            WalkthroughStep {
                title: "Container Strategy",
                description: "Designing containerization strategy and microservices architecture",
                technologies: &["Docker", "Kubernetes", "Helm"],
                duration: "2-3 months",
            },
            WalkthroughStep {
                title: "Cluster Management",
                description: "Setting up and managing Kubernetes clusters across multiple environments",
                technologies: &["EKS", "GKE", "AKS", "kubectl"],
                duration: "1-2 months",
            },
            WalkthroughStep {
                title: "Service Mesh",
                description: "Implementing service mesh for microservices communication and security",
                technologies: &["Istio", "Envoy", "Linkerd"],
                duration: "2-3 months",
            },
            WalkthroughStep {
                title: "GitOps Deployment",
                description: "Implementing GitOps workflows for continuous deployment",
                technologies: &["ArgoCD", "Flux", "GitLab CI/CD"],
                duration: "1-2 months",
            },
        ],
        achievements: &[
            "Scaled applications to handle 10x traffic with zero downtime",
            "Reduced deployment time from hours to minutes",
            "Implemented automated rollback mechanisms",
        ],
    },
    ExpertiseArea {
        id: "monitoring-observability",
        title: "Monitoring & Observability",
        summary: "Building comprehensive monitoring and observability solutions for cloud-native applications",
        experience: "4+ years",
        level: "Expert",
        steps: &[
            WalkthroughStep {
                title: "Metrics Collection",
                description: "Setting up comprehensive metrics collection using Prometheus and custom exporters",
                technologies: &["Prometheus", "Grafana", "Node Exporter"],
                duration: "1-2 months",
            },
            WalkthroughStep {
                title: "Log Management",
                description: "Implementing centralized logging with ELK stack and log aggregation",
                technologies: &["Elasticsearch", "Logstash", "Kibana", "Fluentd"],
                duration: "2-3 months",
            },
            WalkthroughStep {
                title: "Distributed Tracing",
                description: "Setting up distributed tracing for microservices performance monitoring",
                technologies: &["Jaeger", "Zipkin", "OpenTelemetry"],
                duration: "1-2 months",
            },
            WalkthroughStep {
                title: "Alerting & Incident Response",
                description: "Implementing intelligent alerting and automated incident response",
                technologies: &["AlertManager", "PagerDuty", "Slack"],
                duration: "1 month",
            },
        ],
        achievements: &[
            "Reduced mean time to detection (MTTD) by 80%",
            "Achieved 99.9% system visibility across all services",
            "Implemented predictive alerting to prevent outages",
        ],
    },
    ExpertiseArea {
        id: "devops-automation",
        title: "DevOps & Automation",
        summary: "Implementing CI/CD pipelines and automation workflows for efficient software delivery",
        experience: "5+ years",
        level: "Expert",
        steps: &[
            WalkthroughStep {
                title: "CI/CD Pipeline Design",
                description: "Designing and implementing comprehensive CI/CD pipelines for multiple environments",
                technologies: &["Jenkins", "GitHub Actions", "GitLab CI/CD"],
                duration: "2-3 months",
            },
            WalkthroughStep {
                title: "Infrastructure Automation",
                description: "Automating infrastructure provisioning and configuration management",
                technologies: &["Ansible", "Terraform", "Packer"],
                duration: "2-3 months",
            },
            WalkthroughStep {
                title: "Testing Automation",
                description: "Implementing automated testing strategies including unit, integration, and E2E tests",
                technologies: &["Jest", "Cypress", "Selenium", "Pytest"],
                duration: "1-2 months",
            },
            WalkthroughStep {
                title: "Deployment Strategies",
                description: "Implementing blue-green, canary, and rolling deployment strategies",
                technologies: &["Argo Rollouts", "Flagger", "Istio"],
                duration: "1-2 months",
            },
        ],
        achievements: &[
            "Reduced deployment time from 4 hours to 15 minutes",
            "Achieved 99.9% deployment success rate",
            "Implemented automated rollback for failed deployments",
        ],
    },
    ExpertiseArea {
        id: "security-compliance",
        title: "Security & Compliance",
        summary: "Implementing security best practices and compliance frameworks for cloud environments",
        experience: "3+ years",
        level: "Advanced",
        steps: &[
            WalkthroughStep {
                title: "Security Scanning",
                description: "Implementing automated security scanning for vulnerabilities and compliance",
                technologies: &["Trivy", "Snyk", "OWASP ZAP", "SonarQube"],
                duration: "1-2 months",
            },
            WalkthroughStep {
                title: "Secrets Management",
                description: "Setting up secure secrets management and rotation policies",
                technologies: &["HashiCorp Vault", "AWS Secrets Manager", "Azure Key Vault"],
                duration: "1-2 months",
            },
            WalkthroughStep {
                title: "Network Security",
                description: "Implementing network security policies and micro-segmentation",
                technologies: &["Calico", "Cilium", "Network Policies", "WAF"],
                duration: "2-3 months",
            },
            WalkthroughStep {
                title: "Compliance Frameworks",
                description: "Implementing compliance frameworks like SOC 2, GDPR, and HIPAA",
                technologies: &["AWS Config", "CloudTrail", "Audit Logs"],
                duration: "3-4 months",
            },
        ],
        achievements: &[
            "Achieved 100% vulnerability remediation rate",
            "Reduced security incident response time by 80%",
            "Maintained SOC 2 compliance for 2+ years",
        ],
    },
];

pub fn all() -> &'static [ExpertiseArea] {
    AREAS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_area_has_a_walkthrough() {
        for area in AREAS {
            assert!(!area.steps.is_empty(), "{} has no steps", area.id);
            assert!(!area.achievements.is_empty());
        }
    }

    #[test]
    fn test_area_ids_are_unique() {
        for (i, a) in AREAS.iter().enumerate() {
            for b in &AREAS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
