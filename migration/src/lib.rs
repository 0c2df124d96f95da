pub use sea_orm_migration::prelude::*;

mod m20260322_000001_create_tournament_table;
mod m20260322_000002_create_player_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260322_000001_create_tournament_table::Migration),
            Box::new(m20260322_000002_create_player_table::Migration),
        ]
    }
}
