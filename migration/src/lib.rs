pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_identity_tables;
mod m20250301_000002_create_teacher_profile_tables;
mod m20250301_000003_create_student_record_tables;
mod m20250301_000004_create_scheduling_tables;
mod m20250301_000005_create_announcement_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_identity_tables::Migration),
            Box::new(m20250301_000002_create_teacher_profile_tables::Migration),
            Box::new(m20250301_000003_create_student_record_tables::Migration),
            Box::new(m20250301_000004_create_scheduling_tables::Migration),
            Box::new(m20250301_000005_create_announcement_tables::Migration),
        ]
    }
}
