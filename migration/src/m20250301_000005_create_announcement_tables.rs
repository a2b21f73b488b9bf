use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notices::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Notices::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Notices::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Notices::Description).text().not_null())
                    .col(ColumnDef::new(Notices::DetailedDescription).text().not_null())
                    .col(ColumnDef::new(Notices::Category).string_len(16).not_null())
                    .col(ColumnDef::new(Notices::PdfFile).string_len(255).null())
                    .col(ColumnDef::new(Notices::Date).date().not_null())
                    .col(ColumnDef::new(Notices::ExpiryDate).date().null())
                    .col(ColumnDef::new(Notices::Author).string_len(100).not_null())
                    .col(ColumnDef::new(Notices::Location).string_len(255).null())
                    .col(ColumnDef::new(Notices::Time).string_len(50).null())
                    .col(
                        ColumnDef::new(Notices::IsArchived)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Events::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Events::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Events::Date).date().not_null())
                    .col(ColumnDef::new(Events::StartTime).time().not_null())
                    .col(ColumnDef::new(Events::EndTime).time().not_null())
                    .col(ColumnDef::new(Events::Location).string_len(255).not_null())
                    .col(ColumnDef::new(Events::Description).text().not_null())
                    .col(ColumnDef::new(Events::DetailedDescription).text().not_null())
                    .col(ColumnDef::new(Events::Category).string_len(16).not_null())
                    .col(ColumnDef::new(Events::Organizer).string_len(100).not_null())
                    .col(ColumnDef::new(Events::RegistrationDeadline).date().null())
                    .col(ColumnDef::new(Events::ContactEmail).string_len(100).not_null())
                    .col(ColumnDef::new(Events::MaxAttendees).integer().not_null())
                    .col(
                        ColumnDef::new(Events::CurrentAttendees)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Events::RegistrationOpen)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Events::Image).string_len(255).null())
                    .col(ColumnDef::new(Events::Tags).json().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EventRegistrations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EventRegistrations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EventRegistrations::Name).string_len(100).not_null())
                    .col(ColumnDef::new(EventRegistrations::Email).string_len(100).not_null())
                    .col(ColumnDef::new(EventRegistrations::Roll).string_len(50).null())
                    .col(ColumnDef::new(EventRegistrations::RegistrationId).string_len(50).null())
                    .col(ColumnDef::new(EventRegistrations::BatchNo).string_len(50).null())
                    .col(ColumnDef::new(EventRegistrations::Phone).string_len(20).null())
                    .col(ColumnDef::new(EventRegistrations::RegistrationFee).string_len(100).null())
                    .col(
                        ColumnDef::new(EventRegistrations::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ContactMessages::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ContactMessages::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(ContactMessages::FirstName).string_len(100).not_null())
                    .col(ColumnDef::new(ContactMessages::LastName).string_len(100).not_null())
                    .col(ColumnDef::new(ContactMessages::Email).string_len(100).not_null())
                    .col(ColumnDef::new(ContactMessages::Subject).string_len(255).not_null())
                    .col(ColumnDef::new(ContactMessages::Message).text().not_null())
                    .col(ColumnDef::new(ContactMessages::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactMessages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EventRegistrations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Notices::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Notices {
    Table,
    Id,
    Title,
    Description,
    DetailedDescription,
    Category,
    PdfFile,
    Date,
    ExpiryDate,
    Author,
    Location,
    Time,
    IsArchived,
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    Title,
    Date,
    StartTime,
    EndTime,
    Location,
    Description,
    DetailedDescription,
    Category,
    Organizer,
    RegistrationDeadline,
    ContactEmail,
    MaxAttendees,
    CurrentAttendees,
    RegistrationOpen,
    Image,
    Tags,
}

#[derive(DeriveIden)]
enum EventRegistrations {
    Table,
    Id,
    Name,
    Email,
    Roll,
    RegistrationId,
    BatchNo,
    Phone,
    RegistrationFee,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ContactMessages {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Subject,
    Message,
    CreatedAt,
}
