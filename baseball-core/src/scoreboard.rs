//! Placeholder score feeds. Real aggregation over persisted score history is
//! not implemented yet; the endpoints return the fixed sample payloads the
//! clients were built against.

use baseball_types::{MemberScore, ScoreBoard, TeamScores};

pub fn sample_score_board() -> ScoreBoard {
    ScoreBoard {
        home_team: TeamScores {
            team_name: "Marvel".to_string(),
            scores: vec![1, 2, 2],
        },
        away_team: TeamScores {
            team_name: "Captin".to_string(),
            scores: vec![1, 0, 0, 0],
        },
    }
}

pub fn sample_member_scores() -> Vec<MemberScore> {
    [
        (1, "김광진", 1, 1, 0),
        (2, "이동규", 1, 0, 1),
        (3, "김진수", 1, 0, 1),
        (4, "박영권", 1, 1, 0),
        (5, "추신수", 1, 1, 0),
        (6, "이용대", 1, 0, 1),
        (7, "류현진", 1, 0, 1),
        (8, "최동수", 1, 0, 1),
        (9, "한양범", 1, 1, 0),
    ]
    .into_iter()
    .map(|(id, name, tpa, hits, out)| MemberScore {
        id,
        name: name.to_string(),
        tpa,
        hits,
        out,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_score_board_shape() {
        let board = sample_score_board();

        assert_eq!(board.home_team.team_name, "Marvel");
        assert_eq!(board.home_team.scores, vec![1, 2, 2]);
        assert_eq!(board.away_team.team_name, "Captin");
        assert_eq!(board.away_team.scores, vec![1, 0, 0, 0]);
    }

    #[test]
    fn test_sample_member_scores_full_lineup() {
        let scores = sample_member_scores();

        assert_eq!(scores.len(), 9);
        assert_eq!(scores[0].id, 1);
        assert_eq!(scores[0].name, "김광진");
        assert!(scores.iter().all(|score| score.tpa == 1));
        assert!(scores.iter().all(|score| score.hits + score.out == 1));
    }
}
