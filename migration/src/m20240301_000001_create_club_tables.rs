use models::domains::{matches, users};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn player_fk(name: &str, column: matches::Column) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(name)
        .from(matches::Entity, column)
        .to(users::Entity, users::Column::Id)
        .on_delete(ForeignKeyAction::Cascade)
        .on_update(ForeignKeyAction::NoAction)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(users::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(users::Column::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(users::Column::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(users::Column::Name).string().not_null())
                    .col(ColumnDef::new(users::Column::Gender).string_len(8).not_null())
                    .col(
                        ColumnDef::new(users::Column::Role)
                            .string_len(8)
                            .not_null()
                            .default("user"),
                    )
                    .col(
                        ColumnDef::new(users::Column::IsEnabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(users::Column::TotalPoints)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(users::Column::TotalMatches)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(users::Column::WonMatches)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(users::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(matches::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(matches::Column::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(matches::Column::MatchDate).date().not_null())
                    .col(
                        ColumnDef::new(matches::Column::MatchType)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(matches::Column::Player1Id).string().not_null())
                    .col(ColumnDef::new(matches::Column::TeammateId).string().null())
                    .col(ColumnDef::new(matches::Column::Player2Id).string().not_null())
                    .col(ColumnDef::new(matches::Column::Opponent2Id).string().null())
                    .col(
                        ColumnDef::new(matches::Column::Player1Score)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(matches::Column::Player2Score)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(matches::Column::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(matches::Column::Sets).json_binary().not_null())
                    .col(ColumnDef::new(matches::Column::CreatedBy).string().not_null())
                    .col(
                        ColumnDef::new(matches::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(&mut player_fk("fk-matches-player1_id", matches::Column::Player1Id))
                    .foreign_key(&mut player_fk("fk-matches-teammate_id", matches::Column::TeammateId))
                    .foreign_key(&mut player_fk("fk-matches-player2_id", matches::Column::Player2Id))
                    .foreign_key(&mut player_fk(
                        "fk-matches-opponent2_id",
                        matches::Column::Opponent2Id,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-matches-match_date")
                    .table(matches::Entity)
                    .col(matches::Column::MatchDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(matches::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(users::Entity).to_owned())
            .await?;

        Ok(())
    }
}
