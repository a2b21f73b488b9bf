use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::entities::{self, sea_orm_active_enums};
use crate::routes::{self, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Department Service API",
        description = "Accounts, profiles, courses, scheduling, rooms and notices for a university department"
    ),
    paths(
        routes::health::route::health,
        routes::auth::route::login,
        routes::admin::route::admin_signup,
        routes::admin::route::get_admin_profile,
        routes::admin::route::update_admin_profile,
        routes::admin::route::add_student,
        routes::admin::route::add_teacher,
        routes::admin::route::update_student_meta,
        routes::admin::route::update_teacher_meta,
        routes::admin::route::list_students,
        routes::admin::route::list_teachers,
        routes::admin::route::delete_student,
        routes::admin::route::delete_teacher,
        routes::admin::route::delete_user,
        routes::student::route::student_signup,
        routes::student::route::get_my_profile,
        routes::student::route::update_my_profile,
        routes::teacher::route::teacher_signup,
        routes::teacher::route::get_my_profile,
        routes::teacher::route::update_my_profile,
        routes::teacher::route::list_teachers,
        routes::teacher::route::get_teacher_profile,
        routes::education::route::add_education,
        routes::education::route::my_education,
        routes::education::route::update_education,
        routes::education::route::delete_education,
        routes::education::route::list_for_teacher,
        routes::experience::route::add_experience,
        routes::experience::route::my_experience,
        routes::experience::route::update_experience,
        routes::experience::route::delete_experience,
        routes::experience::route::list_for_teacher,
        routes::award::route::add_award,
        routes::award::route::my_awards,
        routes::award::route::update_award,
        routes::award::route::delete_award,
        routes::award::route::list_for_teacher,
        routes::publication::route::add_publication,
        routes::publication::route::my_publications,
        routes::publication::route::update_publication,
        routes::publication::route::delete_publication,
        routes::publication::route::list_for_teacher,
        routes::course::route::create_course,
        routes::course::route::update_course,
        routes::course::route::delete_course,
        routes::course::route::list_courses,
        routes::course::route::list_teacher_courses,
        routes::course::route::get_course,
        routes::room::route::add_room,
        routes::room::route::list_rooms,
        routes::room::route::filter_rooms,
        routes::room::route::book_room,
        routes::room::route::update_booking_status,
        routes::room::route::list_bookings,
        routes::room::route::delete_room,
        routes::meetings::route::create_meeting,
        routes::meetings::route::filter_meetings,
        routes::meetings::route::get_meeting,
        routes::meetings::route::update_meeting,
        routes::meetings::route::delete_meeting,
        routes::exam::route::create_exam,
        routes::exam::route::update_exam,
        routes::exam::route::delete_exam,
        routes::exam::route::filter_exams,
        routes::notice::route::create_notice,
        routes::notice::route::update_notice,
        routes::notice::route::delete_notice,
        routes::notice::route::list_notices,
        routes::notice::route::get_notice,
        routes::event::route::create_event,
        routes::event::route::update_event,
        routes::event::route::delete_event,
        routes::event::route::list_events,
        routes::event::route::get_event,
        routes::event::route::submit_registration,
        routes::results::route::create_result,
        routes::results::route::update_result,
        routes::results::route::delete_result,
        routes::results::route::my_results,
        routes::results::route::student_results,
        routes::equipment::route::create_equipment,
        routes::equipment::route::update_equipment,
        routes::equipment::route::delete_equipment,
        routes::equipment::route::list_equipment,
        routes::equipment::route::book_equipment,
        routes::equipment::route::my_bookings,
        routes::equipment::route::return_equipment,
        routes::contact::route::submit_message,
        routes::contact::route::list_messages,
        routes::contact::route::delete_message,
        routes::files::route::serve_upload,
    ),
    components(
        schemas(
            MessageResponse,
            routes::health::route::HealthResponse,
            routes::auth::dto::LoginForm,
            routes::auth::dto::LoginResponse,
            routes::admin::dto::AdminSignupRequest,
            routes::admin::dto::AdminSignupResponse,
            routes::admin::dto::UpdateAdminRequest,
            routes::admin::dto::AddStudentRequest,
            routes::admin::dto::AddTeacherRequest,
            routes::admin::dto::UpdateStudentMetaRequest,
            routes::admin::dto::UpdateTeacherMetaRequest,
            routes::student::dto::StudentSignupRequest,
            routes::student::dto::UpdateMyStudentProfileRequest,
            routes::teacher::dto::TeacherSignupRequest,
            routes::teacher::dto::UpdateMyTeacherProfileRequest,
            routes::teacher::dto::TeacherProfileResponse,
            routes::education::dto::AddEducationRequest,
            routes::education::dto::UpdateEducationRequest,
            routes::experience::dto::AddExperienceRequest,
            routes::experience::dto::UpdateExperienceRequest,
            routes::award::dto::AddAwardRequest,
            routes::award::dto::UpdateAwardRequest,
            routes::publication::dto::AddPublicationRequest,
            routes::publication::dto::UpdatePublicationRequest,
            routes::course::dto::CreateCourseRequest,
            routes::course::dto::UpdateCourseRequest,
            routes::room::dto::AddRoomRequest,
            routes::room::dto::BookRoomRequest,
            routes::room::dto::UpdateBookingStatusRequest,
            routes::meetings::dto::CreateMeetingRequest,
            routes::meetings::dto::UpdateMeetingRequest,
            routes::exam::dto::CreateExamRequest,
            routes::exam::dto::UpdateExamRequest,
            routes::exam::dto::ExamResponse,
            routes::notice::dto::NoticeForm,
            routes::event::dto::EventForm,
            routes::event::dto::EventRegistrationRequest,
            routes::results::dto::CreateResultRequest,
            routes::results::dto::UpdateResultRequest,
            routes::equipment::dto::CreateEquipmentRequest,
            routes::equipment::dto::UpdateEquipmentRequest,
            routes::contact::dto::ContactRequest,
            entities::admin::Model,
            entities::student::Model,
            entities::teacher::Model,
            entities::education::Model,
            entities::experience::Model,
            entities::award::Model,
            entities::publication::Model,
            entities::course::Model,
            entities::room::Model,
            entities::room_booking::Model,
            entities::meeting::Model,
            entities::exam_schedule::Model,
            entities::notice::Model,
            entities::event::Model,
            entities::event_registration::Model,
            entities::result::Model,
            entities::equipment::Model,
            entities::equipment_booking::Model,
            entities::contact_message::Model,
            sea_orm_active_enums::RoleEnum,
            sea_orm_active_enums::CourseTypeEnum,
            sea_orm_active_enums::ApprovalStatusEnum,
            sea_orm_active_enums::NoticeCategoryEnum,
            sea_orm_active_enums::EventCategoryEnum,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Authentication", description = "Login and token issuance"),
        (name = "Admin", description = "Administration of accounts and pre-approved profiles"),
        (name = "Student", description = "Student signup and self-service"),
        (name = "Teacher", description = "Teacher signup, self-service and directory"),
        (name = "Education", description = "Teacher education history"),
        (name = "Experience", description = "Teacher work experience"),
        (name = "Award", description = "Teacher awards"),
        (name = "Publication", description = "Teacher publications"),
        (name = "Course", description = "Course catalogue"),
        (name = "Room", description = "Rooms and room bookings"),
        (name = "Meetings", description = "Staff meetings"),
        (name = "Exam", description = "Exam schedule"),
        (name = "Notice", description = "Department notices"),
        (name = "Event", description = "Events and registrations"),
        (name = "Results", description = "Student results"),
        (name = "Equipment", description = "Equipment lending"),
        (name = "Contact", description = "Contact form"),
        (name = "Files", description = "Uploaded files")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
