use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn teacher_fk(name: &str, table: impl IntoIden + 'static) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(name)
        .from_tbl(table)
        .from_col(Alias::new("teacher_id"))
        .to_tbl(Teachers::Table)
        .to_col(Teachers::Id)
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
                    .table(Education::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Education::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Education::DegreeName).string_len(100).not_null())
                    .col(ColumnDef::new(Education::Major).string_len(100).null())
                    .col(ColumnDef::new(Education::Institution).string_len(100).not_null())
                    .col(ColumnDef::new(Education::Year).string_len(10).null())
                    .col(ColumnDef::new(Education::TeacherId).uuid().not_null())
                    .foreign_key(&mut teacher_fk("fk_education_teacher", Education::Table))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Experience::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Experience::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Experience::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Experience::Organization).string_len(100).not_null())
                    .col(ColumnDef::new(Experience::Duration).string_len(50).null())
                    .col(ColumnDef::new(Experience::Year).string_len(10).null())
                    .col(ColumnDef::new(Experience::TeacherId).uuid().not_null())
                    .foreign_key(&mut teacher_fk("fk_experience_teacher", Experience::Table))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Awards::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Awards::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Awards::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Awards::AwardType).string_len(100).null())
                    .col(ColumnDef::new(Awards::Description).text().null())
                    .col(ColumnDef::new(Awards::Year).string_len(10).null())
                    .col(ColumnDef::new(Awards::TeacherId).uuid().not_null())
                    .foreign_key(&mut teacher_fk("fk_awards_teacher", Awards::Table))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Publications::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Publications::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Publications::PublicationType).string_len(100).null())
                    .col(ColumnDef::new(Publications::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Publications::Url).string_len(255).null())
                    .col(ColumnDef::new(Publications::TeacherId).uuid().not_null())
                    .foreign_key(&mut teacher_fk("fk_publications_teacher", Publications::Table))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Courses::Code)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Courses::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Courses::Credit).integer().not_null())
                    .col(ColumnDef::new(Courses::CourseType).string_len(16).not_null())
                    .col(ColumnDef::new(Courses::Year).string_len(10).not_null())
                    .col(ColumnDef::new(Courses::Semester).string_len(20).not_null())
                    .col(ColumnDef::new(Courses::Degree).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Courses::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Courses::Content).text().null())
                    .col(ColumnDef::new(Courses::TeacherId).uuid().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_courses_teacher")
                            .from_tbl(Courses::Table)
                            .from_col(Courses::TeacherId)
                            .to_tbl(Teachers::Table)
                            .to_col(Teachers::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Routines::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Routines::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Routines::Batch).string_len(50).not_null())
                    .col(ColumnDef::new(Routines::Semester).string_len(50).not_null())
                    .col(ColumnDef::new(Routines::Day).string_len(20).not_null())
                    .col(ColumnDef::new(Routines::TimeInterval).string_len(50).not_null())
                    .col(ColumnDef::new(Routines::CourseId).uuid().null())
                    .col(ColumnDef::new(Routines::RoomNo).string_len(50).null())
                    .col(ColumnDef::new(Routines::TeacherId).uuid().not_null())
                    .foreign_key(&mut teacher_fk("fk_routines_teacher", Routines::Table))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_routines_course")
                            .from_tbl(Routines::Table)
                            .from_col(Routines::CourseId)
                            .to_tbl(Courses::Table)
                            .to_col(Courses::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_courses_teacher_id")
                    .table(Courses::Table)
                    .col(Courses::TeacherId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Routines::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Publications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Awards::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Experience::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Education::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Teachers {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Education {
    Table,
    Id,
    DegreeName,
    Major,
    Institution,
    Year,
    TeacherId,
}

#[derive(DeriveIden)]
enum Experience {
    Table,
    Id,
    Title,
    Organization,
    Duration,
    Year,
    TeacherId,
}

#[derive(DeriveIden)]
enum Awards {
    Table,
    Id,
    Title,
    AwardType,
    Description,
    Year,
    TeacherId,
}

#[derive(DeriveIden)]
enum Publications {
    Table,
    Id,
    PublicationType,
    Title,
    Url,
    TeacherId,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    Code,
    Title,
    Credit,
    CourseType,
    Year,
    Semester,
    Degree,
    Active,
    Content,
    TeacherId,
}

#[derive(DeriveIden)]
enum Routines {
    Table,
    Id,
    Batch,
    Semester,
    Day,
    TimeInterval,
    CourseId,
    RoomNo,
    TeacherId,
}
