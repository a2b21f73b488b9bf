use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn student_fk(name: &str, table: impl IntoIden + 'static) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(name)
        .from_tbl(table)
        .from_col(Alias::new("student_id"))
        .to_tbl(Students::Table)
        .to_col(Students::Id)
        .on_delete(ForeignKeyAction::Cascade)
        .on_update(ForeignKeyAction::Cascade)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Results::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Results::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Results::StudentId).uuid().not_null())
                    .col(ColumnDef::new(Results::Semester).string_len(50).not_null())
                    .col(ColumnDef::new(Results::Courses).text().not_null())
                    .col(ColumnDef::new(Results::Grade).string_len(10).not_null())
                    .foreign_key(&mut student_fk("fk_results_student", Results::Table))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Assignments::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Assignments::StudentId).uuid().not_null())
                    .col(ColumnDef::new(Assignments::CourseCode).string_len(50).null())
                    .col(ColumnDef::new(Assignments::Teacher).string_len(100).null())
                    .col(ColumnDef::new(Assignments::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Assignments::Instructions).text().null())
                    .col(ColumnDef::new(Assignments::Points).integer().null())
                    .col(ColumnDef::new(Assignments::DueDate).timestamp().null())
                    .col(ColumnDef::new(Assignments::PublishedDate).timestamp().null())
                    .col(ColumnDef::new(Assignments::Attachment).string_len(255).null())
                    .foreign_key(&mut student_fk("fk_assignments_student", Assignments::Table))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Payments::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Payments::StudentId).uuid().not_null())
                    .col(ColumnDef::new(Payments::Fee).string_len(100).not_null())
                    .col(ColumnDef::new(Payments::Cause).string_len(255).not_null())
                    .foreign_key(&mut student_fk("fk_payments_student", Payments::Table))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Equipment::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Equipment::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Equipment::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Equipment::Availability)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EquipmentBookings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EquipmentBookings::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EquipmentBookings::StudentId).uuid().not_null())
                    .col(ColumnDef::new(EquipmentBookings::EquipmentId).uuid().not_null())
                    .col(
                        ColumnDef::new(EquipmentBookings::BookingTime)
                            .timestamp()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EquipmentBookings::ReturnDate).timestamp().null())
                    .foreign_key(&mut student_fk(
                        "fk_equipment_bookings_student",
                        EquipmentBookings::Table,
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_equipment_bookings_equipment")
                            .from_tbl(EquipmentBookings::Table)
                            .from_col(EquipmentBookings::EquipmentId)
                            .to_tbl(Equipment::Table)
                            .to_col(Equipment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_results_student_id")
                    .table(Results::Table)
                    .col(Results::StudentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EquipmentBookings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Equipment::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Results::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Results {
    Table,
    Id,
    StudentId,
    Semester,
    Courses,
    Grade,
}

#[derive(DeriveIden)]
enum Assignments {
    Table,
    Id,
    StudentId,
    CourseCode,
    Teacher,
    Title,
    Instructions,
    Points,
    DueDate,
    PublishedDate,
    Attachment,
}

#[derive(DeriveIden)]
enum Payments {
    Table,
    Id,
    StudentId,
    Fee,
    Cause,
}

#[derive(DeriveIden)]
enum Equipment {
    Table,
    Id,
    Name,
    Availability,
}

#[derive(DeriveIden)]
enum EquipmentBookings {
    Table,
    Id,
    StudentId,
    EquipmentId,
    BookingTime,
    ReturnDate,
}
