pub mod admin_repository;
pub mod contact_repository;
pub mod course_repository;
pub mod equipment_repository;
pub mod event_repository;
pub mod exam_repository;
pub mod meeting_repository;
pub mod notice_repository;
pub mod result_repository;
pub mod room_repository;
pub mod student_repository;
pub mod teacher_profile_repository;
pub mod teacher_repository;
pub mod user_repository;

pub use admin_repository::{AdminRepository, AdminUpdate};
pub use contact_repository::ContactRepository;
pub use course_repository::{CourseFilter, CourseRepository, CourseSort, CourseUpdate, NewCourse};
pub use equipment_repository::EquipmentRepository;
pub use event_repository::{EventRepository, EventUpdate, NewEvent, NewEventRegistration};
pub use exam_repository::{ExamFilter, ExamRepository, ExamUpdate, NewExam};
pub use meeting_repository::{MeetingFilter, MeetingRepository, MeetingSort, MeetingUpdate, NewMeeting};
pub use notice_repository::{NewNotice, NoticeRepository, NoticeUpdate};
pub use result_repository::{ResultRepository, ResultUpdate};
pub use room_repository::{BookingFilter, NewRoomBooking, RoomFilter, RoomRepository};
pub use student_repository::{NewStudent, StudentFilter, StudentRepository, StudentUpdate};
pub use teacher_profile_repository::{
    AwardRepository, AwardUpdate, EducationRepository, EducationUpdate, ExperienceRepository,
    ExperienceUpdate, NewAward, NewEducation, NewExperience, NewPublication, PublicationRepository,
    PublicationUpdate,
};
pub use teacher_repository::{NewTeacher, TeacherFilter, TeacherRepository, TeacherUpdate};
pub use user_repository::UserRepository;

use sea_orm::ColumnTrait;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};

/// Case-insensitive substring match that behaves the same on every backend.
pub(crate) fn contains_ci<C: ColumnTrait + 'static>(column: C, term: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col((column.entity_name(), column))))
        .like(format!("%{}%", term.to_lowercase()))
}
