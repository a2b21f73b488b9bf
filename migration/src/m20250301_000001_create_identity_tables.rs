use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Password).string_len(255).not_null())
                    .col(ColumnDef::new(Users::Role).string_len(16).not_null())
                    .col(ColumnDef::new(Users::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Admins::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Admins::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Admins::UserId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(Admins::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Admins::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Admins::Phone).string_len(20).not_null())
                    .col(ColumnDef::new(Admins::Password).string_len(255).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_admins_user")
                            .from_tbl(Admins::Table)
                            .from_col(Admins::UserId)
                            .to_tbl(Users::Table)
                            .to_col(Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Student and teacher rows are pre-approved before any user exists,
        // so user_id stays nullable until signup claims the row.
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Students::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Students::UserId).uuid().null().unique_key())
                    .col(
                        ColumnDef::new(Students::RegistrationNumber)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Students::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Students::Session).string_len(50).null())
                    .col(ColumnDef::new(Students::Hall).string_len(100).null())
                    .col(ColumnDef::new(Students::Degree).string_len(100).null())
                    .col(ColumnDef::new(Students::Semester).string_len(20).null())
                    .col(ColumnDef::new(Students::FatherName).string_len(100).null())
                    .col(ColumnDef::new(Students::MotherName).string_len(100).null())
                    .col(ColumnDef::new(Students::Phone).string_len(20).null())
                    .col(ColumnDef::new(Students::Address).string_len(255).null())
                    .col(ColumnDef::new(Students::ProfilePic).string_len(255).null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_user")
                            .from_tbl(Students::Table)
                            .from_col(Students::UserId)
                            .to_tbl(Users::Table)
                            .to_col(Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Teachers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Teachers::UserId).uuid().null().unique_key())
                    .col(
                        ColumnDef::new(Teachers::RegistrationNumber)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Teachers::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Teachers::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Teachers::Department).string_len(100).not_null())
                    .col(ColumnDef::new(Teachers::Bio).text().null())
                    .col(ColumnDef::new(Teachers::Title).string_len(100).null())
                    .col(ColumnDef::new(Teachers::Phone).string_len(20).null())
                    .col(ColumnDef::new(Teachers::ProfilePic).string_len(255).null())
                    .col(ColumnDef::new(Teachers::ResearchProfile).string_len(255).null())
                    .col(ColumnDef::new(Teachers::SocialsLinkedin).string_len(255).null())
                    .col(ColumnDef::new(Teachers::SocialsGithub).string_len(255).null())
                    .col(ColumnDef::new(Teachers::SocialsTwitter).string_len(255).null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teachers_user")
                            .from_tbl(Teachers::Table)
                            .from_col(Teachers::UserId)
                            .to_tbl(Users::Table)
                            .to_col(Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Admins::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    Password,
    Role,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Admins {
    Table,
    Id,
    UserId,
    Name,
    Email,
    Phone,
    Password,
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
    UserId,
    RegistrationNumber,
    Email,
    Name,
    Session,
    Hall,
    Degree,
    Semester,
    FatherName,
    MotherName,
    Phone,
    Address,
    ProfilePic,
}

#[derive(DeriveIden)]
enum Teachers {
    Table,
    Id,
    UserId,
    RegistrationNumber,
    Email,
    Name,
    Department,
    Bio,
    Title,
    Phone,
    ProfilePic,
    ResearchProfile,
    SocialsLinkedin,
    SocialsGithub,
    SocialsTwitter,
}
