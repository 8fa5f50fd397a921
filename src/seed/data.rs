//! Built-in seed catalog: the directory, packages, registrations, and
//! courses the portal starts with.

use crate::models::course::{Course, Lesson, LessonKind, Question};
use crate::models::package::{Package, PackageKind, PackageStatus};
use crate::models::registration::{DocumentChecklist, Registration, RegistrationStatus};
use crate::models::user::{Role, User};

/// 2024-01-01, the creation date of the pre-existing registration
const SEED_REGISTRATION_CREATED_AT: i64 = 1_704_067_200;

pub fn users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            email: "jamaah@test.com".to_string(),
            name: "Ahmad Jamaah".to_string(),
            role: Role::Pilgrim,
            branch_id: None,
            agent_code: None,
            phone: Some("+6281234567890".to_string()),
        },
        User {
            id: "2".to_string(),
            email: "agen@test.com".to_string(),
            name: "Siti Agen".to_string(),
            role: Role::Agent,
            branch_id: Some("BR001".to_string()),
            agent_code: Some("AG001".to_string()),
            phone: Some("+6281234567891".to_string()),
        },
        User {
            id: "3".to_string(),
            email: "cabang@test.com".to_string(),
            name: "Budi Manager".to_string(),
            role: Role::BranchManager,
            branch_id: Some("BR001".to_string()),
            agent_code: None,
            phone: Some("+6281234567892".to_string()),
        },
        User {
            id: "4".to_string(),
            email: "bendahara@test.com".to_string(),
            name: "Dewi Treasurer".to_string(),
            role: Role::Treasurer,
            branch_id: None,
            agent_code: None,
            phone: Some("+6281234567893".to_string()),
        },
        User {
            id: "5".to_string(),
            email: "admin@test.com".to_string(),
            name: "Admin System".to_string(),
            role: Role::Admin,
            branch_id: None,
            agent_code: None,
            phone: Some("+6281234567894".to_string()),
        },
    ]
}

pub fn packages() -> Vec<Package> {
    vec![
        Package {
            id: "P001".to_string(),
            name: "Umrah Ekonomi Januari 2024".to_string(),
            kind: PackageKind::Umrah,
            price: 25_000_000,
            min_down_payment: 5_000_000,
            quota: 45,
            registered: 32,
            departure_date: "2024-01-15".to_string(),
            duration: "12 hari".to_string(),
            status: PackageStatus::Open,
        },
        Package {
            id: "P002".to_string(),
            name: "Hajj ONH Plus 2024".to_string(),
            kind: PackageKind::HajjStandard,
            price: 45_000_000,
            min_down_payment: 10_000_000,
            quota: 40,
            registered: 38,
            departure_date: "2024-06-10".to_string(),
            duration: "40 hari".to_string(),
            status: PackageStatus::Open,
        },
        Package {
            id: "P003".to_string(),
            name: "Hajj Furoda Premium 2024".to_string(),
            kind: PackageKind::HajjPremium,
            price: 85_000_000,
            min_down_payment: 20_000_000,
            quota: 20,
            registered: 15,
            departure_date: "2024-06-05".to_string(),
            duration: "45 hari".to_string(),
            status: PackageStatus::Open,
        },
    ]
}

pub fn registrations() -> Vec<Registration> {
    vec![Registration {
        id: "R001".to_string(),
        pilgrim_id: "1".to_string(),
        package_id: "P001".to_string(),
        agent_id: Some("2".to_string()),
        status: RegistrationStatus::DownPaymentMade,
        total_amount: 25_000_000,
        dp_amount: 5_000_000,
        paid_amount: 5_000_000,
        remaining_amount: 20_000_000,
        created_at: SEED_REGISTRATION_CREATED_AT,
        documents: DocumentChecklist {
            passport: true,
            id_card: true,
            vaccine: false,
            visa: false,
            ticket: false,
        },
    }]
}

fn video(id: &str, title: &str, duration: u32, url: &str) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: title.to_string(),
        kind: LessonKind::Video,
        duration,
        video_url: Some(url.to_string()),
        document_url: None,
        questions: Vec::new(),
    }
}

fn document(id: &str, title: &str, duration: u32, url: &str) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: title.to_string(),
        kind: LessonKind::Document,
        duration,
        video_url: None,
        document_url: Some(url.to_string()),
        questions: Vec::new(),
    }
}

fn quiz(id: &str, title: &str, duration: u32, questions: Vec<Question>) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: title.to_string(),
        kind: LessonKind::Quiz,
        duration,
        video_url: None,
        document_url: None,
        questions,
    }
}

fn question(id: &str, text: &str, options: [&str; 4], correct_answer: usize) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        options: options.iter().map(|option| option.to_string()).collect(),
        correct_answer,
    }
}

pub fn courses() -> Vec<Course> {
    vec![
        Course {
            id: "AGENT_SALES_101".to_string(),
            title: "Sales Excellence for Umrah & Hajj".to_string(),
            description: "Master the art of selling spiritual journeys with ethical sales techniques"
                .to_string(),
            category: "Sales".to_string(),
            target_role: Role::Agent,
            total_duration: 180,
            certificate_template: "sales-excellence".to_string(),
            lessons: vec![
                video(
                    "L001",
                    "Understanding Your Customers Spiritual Needs",
                    45,
                    "/videos/customer-needs.mp4",
                ),
                video(
                    "L002",
                    "Ethical Sales Techniques in Religious Tourism",
                    60,
                    "/videos/ethical-sales.mp4",
                ),
                document(
                    "L003",
                    "Handling Objections with Empathy",
                    30,
                    "/docs/objection-handling.pdf",
                ),
                quiz(
                    "L004",
                    "Sales Assessment",
                    45,
                    vec![
                        question(
                            "Q001",
                            "What is the most important factor when selling Umrah packages?",
                            ["Price", "Spiritual value", "Hotel ratings", "Flight schedule"],
                            1,
                        ),
                        question(
                            "Q002",
                            "How should you handle price objections?",
                            [
                                "Immediately offer discounts",
                                "Focus on value and spiritual benefits",
                                "Ignore the objection",
                                "Change the topic",
                            ],
                            1,
                        ),
                    ],
                ),
            ],
        },
        Course {
            id: "AGENT_MARKETING_101".to_string(),
            title: "Digital Marketing for Umrah Agents".to_string(),
            description: "Learn modern digital marketing strategies for promoting spiritual travel"
                .to_string(),
            category: "Marketing".to_string(),
            target_role: Role::Agent,
            total_duration: 210,
            certificate_template: "digital-marketing".to_string(),
            lessons: vec![
                video(
                    "L005",
                    "Social Media Marketing for Religious Travel",
                    60,
                    "/videos/social-media.mp4",
                ),
                video(
                    "L006",
                    "Content Creation Best Practices",
                    75,
                    "/videos/content-creation.mp4",
                ),
                document(
                    "L007",
                    "WhatsApp Marketing Strategies",
                    30,
                    "/docs/whatsapp-marketing.pdf",
                ),
                quiz(
                    "L008",
                    "Marketing Assessment",
                    45,
                    vec![question(
                        "Q003",
                        "Which platform is most effective for Umrah marketing in Indonesia?",
                        ["Facebook", "Instagram", "WhatsApp", "All of the above"],
                        3,
                    )],
                ),
            ],
        },
        Course {
            id: "AGENT_OPERATIONS_101".to_string(),
            title: "Operational Excellence for Agents".to_string(),
            description: "Master the operational aspects of managing Umrah & Hajj registrations"
                .to_string(),
            category: "Operations".to_string(),
            target_role: Role::Agent,
            total_duration: 150,
            certificate_template: "operations".to_string(),
            lessons: vec![
                video(
                    "L009",
                    "Document Processing Workflows",
                    45,
                    "/videos/document-processing.mp4",
                ),
                video(
                    "L010",
                    "Payment Management Best Practices",
                    60,
                    "/videos/payment-management.mp4",
                ),
                document(
                    "L011",
                    "Customer Service Excellence",
                    30,
                    "/docs/customer-service.pdf",
                ),
                quiz(
                    "L012",
                    "Operations Assessment",
                    15,
                    vec![question(
                        "Q004",
                        "What is the first step in document processing?",
                        [
                            "Upload to system",
                            "Verify authenticity",
                            "Send to branch",
                            "Contact customer",
                        ],
                        1,
                    )],
                ),
            ],
        },
        Course {
            id: "BRANCH_MANAGEMENT_101".to_string(),
            title: "Branch Management Fundamentals".to_string(),
            description: "Essential skills for managing a successful Umrah & Hajj branch".to_string(),
            category: "Management".to_string(),
            target_role: Role::BranchManager,
            total_duration: 240,
            certificate_template: "branch-management".to_string(),
            lessons: vec![
                video(
                    "L013",
                    "Leadership in Islamic Business",
                    60,
                    "/videos/islamic-leadership.mp4",
                ),
                video(
                    "L014",
                    "Team Building and Motivation",
                    75,
                    "/videos/team-building.mp4",
                ),
                document(
                    "L015",
                    "Branch Performance Metrics",
                    45,
                    "/docs/performance-metrics.pdf",
                ),
                video(
                    "L016",
                    "Conflict Resolution",
                    45,
                    "/videos/conflict-resolution.mp4",
                ),
                quiz(
                    "L017",
                    "Management Assessment",
                    15,
                    vec![question(
                        "Q005",
                        "What is the most important quality of a branch manager?",
                        [
                            "Technical skills",
                            "Leadership",
                            "Sales ability",
                            "Product knowledge",
                        ],
                        1,
                    )],
                ),
            ],
        },
        Course {
            id: "BRANCH_WORKFLOWS_101".to_string(),
            title: "Approval Workflows & Process Management".to_string(),
            description: "Master the approval processes and workflow management".to_string(),
            category: "Workflows".to_string(),
            target_role: Role::BranchManager,
            total_duration: 180,
            certificate_template: "workflow-management".to_string(),
            lessons: vec![
                video(
                    "L018",
                    "Document Approval Procedures",
                    60,
                    "/videos/approval-procedures.mp4",
                ),
                video(
                    "L019",
                    "Quality Control Standards",
                    45,
                    "/videos/quality-control.mp4",
                ),
                document(
                    "L020",
                    "Escalation Procedures",
                    30,
                    "/docs/escalation-procedures.pdf",
                ),
                video(
                    "L021",
                    "Process Optimization",
                    30,
                    "/videos/process-optimization.mp4",
                ),
                quiz(
                    "L022",
                    "Workflow Assessment",
                    15,
                    vec![question(
                        "Q006",
                        "When should a document be escalated to admin level?",
                        [
                            "Always",
                            "When in doubt",
                            "Only for major issues",
                            "When customer requests",
                        ],
                        2,
                    )],
                ),
            ],
        },
        Course {
            id: "BRANCH_PERFORMANCE_101".to_string(),
            title: "Team Performance Tracking & Analytics".to_string(),
            description: "Learn to track, analyze, and improve team performance".to_string(),
            category: "Analytics".to_string(),
            target_role: Role::BranchManager,
            total_duration: 150,
            certificate_template: "performance-tracking".to_string(),
            lessons: vec![
                video(
                    "L023",
                    "KPI Development and Tracking",
                    45,
                    "/videos/kpi-tracking.mp4",
                ),
                video(
                    "L024",
                    "Performance Review Techniques",
                    60,
                    "/videos/performance-review.mp4",
                ),
                document(
                    "L025",
                    "Data Analysis for Branch Managers",
                    30,
                    "/docs/data-analysis.pdf",
                ),
                quiz(
                    "L026",
                    "Performance Assessment",
                    15,
                    vec![question(
                        "Q007",
                        "How often should performance reviews be conducted?",
                        ["Annually", "Quarterly", "Monthly", "Weekly"],
                        1,
                    )],
                ),
            ],
        },
    ]
}
