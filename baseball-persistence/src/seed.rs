use anyhow::Result;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::info;

use crate::entities::{prelude::*, *};

const LEAGUE: &[(&str, &str)] = &[("Marvel", "Captin"), ("Twins", "Rockets")];

fn demo_roster(team: &str) -> &'static [&'static str] {
    match team {
        "Marvel" => &[
            "Tony Parker", "Steve Rowe", "Bruce Bell", "Peter Chan", "Sam Wilson",
            "Scott Lane", "Wanda Ross", "James Rhodes", "Stephen Vance",
        ],
        "Captin" => &[
            "Dan Harmon", "Eli Cortez", "Marcus Webb", "Noah Reyes", "Owen Pratt",
            "Felix Hong", "Gary Stone", "Hank Mills", "Ivan Petrov",
        ],
        "Twins" => &[
            "Aaron Cole", "Blake Munro", "Caleb Ortiz", "Derek Shaw", "Ethan Park",
            "Frank Doyle", "Glen Harper", "Henry Voss", "Isaac Monroe",
        ],
        "Rockets" => &[
            "Jack Turner", "Kyle Bennett", "Liam Fisher", "Mason Grant", "Nolan Price",
            "Oscar Dean", "Paul Sutton", "Quinn Walsh", "Ryan Booker",
        ],
        _ => &[],
    }
}

/// Insert one matchup with its two rosters. Returns the new game id.
pub async fn insert_game(
    db: &DatabaseConnection,
    home: &str,
    away: &str,
    home_roster: &[&str],
    away_roster: &[&str],
) -> Result<i32> {
    let game_id = Games::insert(games::ActiveModel {
        choice_team: Set(None),
        ..Default::default()
    })
    .exec(db)
    .await?
    .last_insert_id;

    for (name, side, roster) in [(home, "HOME", home_roster), (away, "AWAY", away_roster)] {
        let team_id = Teams::insert(teams::ActiveModel {
            game_id: Set(game_id),
            name: Set(name.to_string()),
            side: Set(side.to_string()),
            ..Default::default()
        })
        .exec(db)
        .await?
        .last_insert_id;

        for member_name in roster {
            Members::insert(members::ActiveModel {
                team_id: Set(team_id),
                name: Set(member_name.to_string()),
                ..Default::default()
            })
            .exec(db)
            .await?;
        }
    }

    Ok(game_id)
}

/// Insert the demo league when the store is empty, so a fresh server has
/// games to serve.
pub async fn seed_sample_league(db: &DatabaseConnection) -> Result<()> {
    if Games::find().count(db).await? > 0 {
        return Ok(());
    }

    for (home, away) in LEAGUE {
        insert_game(db, home, away, demo_roster(home), demo_roster(away)).await?;
    }

    info!("seeded demo league with {} games", LEAGUE.len());
    Ok(())
}
