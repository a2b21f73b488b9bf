use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Rooms::Id).integer().not_null().primary_key())
                    .col(ColumnDef::new(Rooms::Location).string_len(255).not_null())
                    .col(ColumnDef::new(Rooms::Capacity).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RoomBookings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(RoomBookings::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(RoomBookings::RoomId).integer().not_null())
                    .col(ColumnDef::new(RoomBookings::Date).date().not_null())
                    .col(ColumnDef::new(RoomBookings::StartTime).time().not_null())
                    .col(ColumnDef::new(RoomBookings::EndTime).time().not_null())
                    .col(ColumnDef::new(RoomBookings::BookingPurpose).string_len(255).null())
                    .col(
                        ColumnDef::new(RoomBookings::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(RoomBookings::BookingTime).timestamp().not_null())
                    .col(ColumnDef::new(RoomBookings::UserId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_bookings_room")
                            .from_tbl(RoomBookings::Table)
                            .from_col(RoomBookings::RoomId)
                            .to_tbl(Rooms::Table)
                            .to_col(Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_bookings_user")
                            .from_tbl(RoomBookings::Table)
                            .from_col(RoomBookings::UserId)
                            .to_tbl(Users::Table)
                            .to_col(Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_room_bookings_room_date")
                    .table(RoomBookings::Table)
                    .col(RoomBookings::RoomId)
                    .col(RoomBookings::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Meetings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Meetings::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Meetings::Date).date().not_null())
                    .col(ColumnDef::new(Meetings::Time).time().not_null())
                    .col(ColumnDef::new(Meetings::Topic).string_len(255).not_null())
                    .col(ColumnDef::new(Meetings::HostName).string_len(100).not_null())
                    .col(ColumnDef::new(Meetings::Location).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Meetings::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending"),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ExamSchedules::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ExamSchedules::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(ExamSchedules::Date).date().not_null())
                    .col(ColumnDef::new(ExamSchedules::StartTime).time().not_null())
                    .col(ColumnDef::new(ExamSchedules::EndTime).time().not_null())
                    .col(ColumnDef::new(ExamSchedules::CourseId).uuid().null())
                    .col(ColumnDef::new(ExamSchedules::RoomNo).string_len(50).not_null())
                    .col(ColumnDef::new(ExamSchedules::Invigilator).string_len(100).not_null())
                    .col(ColumnDef::new(ExamSchedules::Semester).string_len(20).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exam_schedules_course")
                            .from_tbl(ExamSchedules::Table)
                            .from_col(ExamSchedules::CourseId)
                            .to_tbl(Courses::Table)
                            .to_col(Courses::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExamSchedules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Meetings::Table).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_room_bookings_room_date")
                    .table(RoomBookings::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(RoomBookings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Rooms {
    Table,
    Id,
    Location,
    Capacity,
}

#[derive(DeriveIden)]
enum RoomBookings {
    Table,
    Id,
    RoomId,
    Date,
    StartTime,
    EndTime,
    BookingPurpose,
    Status,
    BookingTime,
    UserId,
}

#[derive(DeriveIden)]
enum Meetings {
    Table,
    Id,
    Date,
    Time,
    Topic,
    HostName,
    Location,
    Status,
}

#[derive(DeriveIden)]
enum ExamSchedules {
    Table,
    Id,
    Date,
    StartTime,
    EndTime,
    CourseId,
    RoomNo,
    Invigilator,
    Semester,
}
