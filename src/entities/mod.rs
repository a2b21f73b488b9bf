//! `SeaORM` entities for the department schema

pub mod admin;
pub mod assignment;
pub mod award;
pub mod contact_message;
pub mod course;
pub mod education;
pub mod equipment;
pub mod equipment_booking;
pub mod event;
pub mod event_registration;
pub mod exam_schedule;
pub mod experience;
pub mod meeting;
pub mod notice;
pub mod payment;
pub mod publication;
pub mod result;
pub mod room;
pub mod room_booking;
pub mod routine;
pub mod sea_orm_active_enums;
pub mod student;
pub mod teacher;
pub mod user;
