pub mod course;
pub mod role;

pub use course::{
    Course, CourseState, CourseStatistics, Decision, NewCourseRequest, UpdateCourseRequest,
    ValidCourse,
};
pub use role::{Role, RoleName};
