use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // team_id カラムにインデックスを追加（チーム別の絞り込み用）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Tasks::Table)
                    .name("idx_tasks_team_id")
                    .col(Tasks::TeamId)
                    .to_owned(),
            )
            .await?;

        // start_date カラムにインデックスを追加（カレンダー期間検索用）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Tasks::Table)
                    .name("idx_tasks_start_date")
                    .col(Tasks::StartDate)
                    .to_owned(),
            )
            .await?;

        // created_at カラムにインデックスを追加（作成順の一覧用）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Tasks::Table)
                    .name("idx_tasks_created_at")
                    .col(Tasks::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // インデックスを削除
        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .table(Tasks::Table)
                    .name("idx_tasks_team_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .table(Tasks::Table)
                    .name("idx_tasks_start_date")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .table(Tasks::Table)
                    .name("idx_tasks_created_at")
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

/// Reference to the tasks table
#[derive(DeriveIden)]
enum Tasks {
    Table,
    TeamId,
    StartDate,
    CreatedAt,
}
