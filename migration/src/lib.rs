// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// マイグレーションモジュール
mod m20250301_000001_create_teams_table;
mod m20250301_000002_create_tasks_table;
mod m20250315_000001_add_task_indexes; // 追加したインデックスマイグレーション

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. 基本テーブル作成（依存関係なし）
            Box::new(m20250301_000001_create_teams_table::Migration),
            // 2. 依存テーブル作成（teamsテーブルに依存）
            Box::new(m20250301_000002_create_tasks_table::Migration),
            // 3. カレンダー検索用のインデックス追加
            Box::new(m20250315_000001_add_task_indexes::Migration),
        ]
    }
}
