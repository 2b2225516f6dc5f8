pub mod approval;
pub mod course_service;
pub mod seeder;

pub use approval::ApprovalWorkflow;
pub use course_service::CourseService;
pub use seeder::seed_roles;
