//! Seed data: the English football pyramid as of the 2018/19 season.

use rand::Rng;
use thiserror::Error;

use crate::domain::league::errors::LeagueError;
use crate::domain::league::models::LeagueName;
use crate::domain::league::ports::LeagueRepository;
use crate::domain::team::errors::TeamError;
use crate::domain::team::models::NewTeam;
use crate::domain::team::models::TeamName;
use crate::domain::team::models::TeamStrip;
use crate::domain::team::ports::TeamRepository;

/// Strip colours handed out at random to seeded teams.
pub const STRIP_COLOURS: [&str; 9] = [
    "white", "black", "red", "orange", "yellow", "green", "blue", "indigo", "violet",
];

/// Seeded leagues with their teams, in insertion order.
pub const LEAGUES: &[(&str, &[&str])] = &[
    (
        "Premier League",
        &[
            "AFC Bournemouth",
            "Arsenal",
            "Brighton",
            "Burnley",
            "Crystal Palace",
            "Cardiff City",
            "Chelsea",
            "Everton",
            "Fulham",
            "Huddersfield Town",
            "Leicester City",
            "Manchester City",
            "Manchester United",
            "Newcastle Utd",
            "Southampton",
            "Tottenham Hotspur",
            "Watford",
            "West Ham United",
            "Wolverhampton Wanderers",
        ],
    ),
    (
        "Championship",
        &[
            "Aston Villa",
            "Birmingham City",
            "Blackburn Rovers",
            "Brentford",
            "Bristol City",
            "Derby County",
            "Hull City",
            "Ipswich Town",
            "Leeds United",
            "Middlesbrough",
            "Millwall",
            "Norwich City",
            "Nottingham Forest",
            "Preston North End",
            "Queens Park Rangers",
            "Reading",
            "Rotherham United",
            "Sheffield United",
            "Sheffield Wednesday",
            "Stoke City",
            "Swansea City",
            "West Bromwich Albion",
            "Wigan Athletic",
        ],
    ),
    (
        "League One",
        &[
            "AFC Wimbledon",
            "Accrington Stanley",
            "Barnsley",
            "Blackpool",
            "Bradford City",
            "Bristol Rovers",
            "Burton Albion",
            "Charlton Athletic",
            "Coventry City",
            "Doncaster Rovers",
            "Fleetwood Town",
            "Gillingham",
            "Luton Town",
            "Oxford United",
            "Peterborough United",
            "Plymouth Argyle",
            "Portsmouth",
            "Rochdale",
            "Scunthorpe United",
            "Shrewsbury Town",
            "Southend United",
            "Sunderland",
            "Walsall",
            "Wycombe Wanderers",
        ],
    ),
    (
        "League Two",
        &[
            "Bury",
            "Cambridge United",
            "Carlisle United",
            "Cheltenham Town",
            "Colchester United",
            "Crawley Town",
            "Crewe Alexandra",
            "Exeter City",
            "Forest Green Rovers",
            "Grimsby Town",
            "Lincoln City",
            "MK Dons",
            "Macclesfield Town",
            "Mansfield Town",
            "Newport County",
            "Northampton Town",
            "Notts County",
            "Oldham Athletic",
            "Port Vale",
            "Stevenage",
            "Swindon Town",
            "Tranmere Rovers",
            "Yeovil Town.",
        ],
    ),
    (
        "National League",
        &[
            "AFC Fylde",
            "Aldershot Town",
            "Barnet",
            "Barrow",
            "Boreham Wood",
            "Braintree Town",
            "Bromley",
            "Chesterfield",
            "Dagenham & Redbridge",
            "Dover Athletic",
            "Eastleigh",
            "Ebbsfleet United",
            "Gateshead",
            "FC Halifax Town",
            "Harrogate Town",
            "Havant & Waterlooville",
            "Leyton Orient",
            "Maidenhead United",
            "Salford City",
            "Solihull Moors",
            "Sutton United",
            "Wrexham AFC.",
        ],
    ),
];

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to seed league: {0}")]
    League(#[from] LeagueError),

    #[error("Failed to seed team: {0}")]
    Team(#[from] TeamError),
}

/// Counts of inserted rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureSummary {
    pub leagues: usize,
    pub teams: usize,
}

/// Insert every seeded league and its teams.
///
/// Team names are stored as listed, some of them outside what request
/// validation accepts.
///
/// # Arguments
/// * `leagues` - League persistence
/// * `teams` - Team persistence
/// * `rng` - Source for strip colours
///
/// # Errors
/// First repository failure; rows inserted before it are kept.
pub async fn load_fixtures<LR, TR, R>(
    leagues: &LR,
    teams: &TR,
    rng: &mut R,
) -> Result<FixtureSummary, FixtureError>
where
    LR: LeagueRepository,
    TR: TeamRepository,
    R: Rng,
{
    let mut summary = FixtureSummary {
        leagues: 0,
        teams: 0,
    };

    for (league_name, team_names) in LEAGUES {
        let league = leagues
            .create(LeagueName::new(league_name.to_string()).map_err(LeagueError::from)?)
            .await?;
        summary.leagues += 1;

        for team_name in team_names.iter() {
            let strip = STRIP_COLOURS[rng.gen_range(0..STRIP_COLOURS.len())];
            teams
                .create(NewTeam {
                    league_id: league.id,
                    name: TeamName::trusted(team_name.to_string()),
                    strip: TeamStrip::trusted(strip.to_string()),
                })
                .await?;
            summary.teams += 1;
        }

        tracing::info!(league = %league.name, teams = team_names.len(), "League seeded");
    }

    Ok(summary)
}
