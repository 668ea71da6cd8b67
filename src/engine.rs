//! Game rules: how a token moves across the board and the quickest way up.

use std::collections::{BTreeMap, HashMap, VecDeque};

use crate::error::BoardError;
use crate::model::{BoardData, Connector, Path};

pub const DIE_FACES: u32 = 6;

/// Parses whitespace-separated `src,dst` tokens, e.g. `"32,62 42,68 12,98"`.
pub fn parse_paths(line: &str) -> Result<Vec<Path>, BoardError> {
    line.split_whitespace()
        .map(|token| {
            let (src, dst) = token
                .split_once(',')
                .ok_or_else(|| BoardError::PathToken(token.to_string()))?;
            let parse = |s: &str| {
                s.trim()
                    .parse::<i64>()
                    .map_err(|_| BoardError::PathToken(token.to_string()))
            };
            Ok(Path { src: parse(src)?, dst: parse(dst)? })
        })
        .collect()
}

/// Built-in board used by `/boards/sample` when the host carries no inline board.
pub fn sample_board() -> BoardData {
    let path = |src, dst| Path { src, dst };
    BoardData {
        ladders: vec![path(32, 62), path(42, 68), path(12, 98)],
        snakes: vec![
            path(95, 13),
            path(97, 25),
            path(93, 37),
            path(79, 27),
            path(75, 19),
            path(49, 47),
            path(67, 17),
        ],
    }
}

/// Board written inline on the host as `data-ladders` / `data-snakes` in path notation.
pub fn inline_board<F>(attr: F) -> Result<Option<BoardData>, BoardError>
where
    F: Fn(&str) -> Option<String>,
{
    let ladders = attr("data-ladders");
    let snakes = attr("data-snakes");
    if ladders.is_none() && snakes.is_none() {
        return Ok(None);
    }
    Ok(Some(BoardData {
        ladders: parse_paths(ladders.as_deref().unwrap_or(""))?,
        snakes: parse_paths(snakes.as_deref().unwrap_or(""))?,
    }))
}

/// Moves available from each 1-based cell, keyed by target cell, valued by die face.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveGraph {
    pub cells: u32,
    edges: BTreeMap<u32, BTreeMap<u32, u32>>,
}

impl MoveGraph {
    /// Board without snakes or ladders: each cell reaches the next six (capped at the last).
    pub fn pristine(cells: u32) -> Self {
        let mut edges = BTreeMap::new();
        for i in 1..=cells {
            let moves: BTreeMap<u32, u32> = (i + 1..=(i + DIE_FACES).min(cells))
                .map(|j| (j, j - i))
                .collect();
            edges.insert(i, moves);
        }
        Self { cells, edges }
    }

    /// Landing on a connector source moves the token to its destination (once, no chaining).
    pub fn with_connectors(&self, connectors: &[Connector]) -> Self {
        let on_board = |n: i64| u32::try_from(n).ok().filter(|n| (1..=self.cells).contains(n));
        let jumps: HashMap<u32, u32> = connectors
            .iter()
            .filter_map(|c| Some((on_board(c.src)?, on_board(c.dst)?)))
            .collect();
        let edges = self
            .edges
            .iter()
            .map(|(&from, moves)| {
                let moves: BTreeMap<u32, u32> = moves
                    .iter()
                    .map(|(&to, &face)| (jumps.get(&to).copied().unwrap_or(to), face))
                    .collect();
                (from, moves)
            })
            .collect();
        Self { cells: self.cells, edges }
    }

    pub fn moves_from(&self, cell: u32) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.edges
            .get(&cell)
            .into_iter()
            .flat_map(|m| m.iter().map(|(&to, &face)| (to, face)))
    }
}

/// Fewest throws from cell 1 to the last cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickestRoute {
    pub throws: u32,
    /// Cells the token rests on, starting at 1 and ending at the last cell.
    pub cells: Vec<u32>,
}

pub fn quickest_route(graph: &MoveGraph) -> Option<QuickestRoute> {
    let goal = graph.cells;
    if goal == 0 {
        return None;
    }
    let mut parent: HashMap<u32, u32> = HashMap::new();
    let mut q = VecDeque::from([1u32]);
    parent.insert(1, 1);
    while let Some(cur) = q.pop_front() {
        if cur == goal {
            break;
        }
        for (next, _) in graph.moves_from(cur) {
            if !parent.contains_key(&next) {
                parent.insert(next, cur);
                q.push_back(next);
            }
        }
    }
    if !parent.contains_key(&goal) {
        return None;
    }
    let mut cells = vec![goal];
    let mut cur = goal;
    while cur != 1 {
        cur = parent[&cur];
        cells.push(cur);
    }
    cells.reverse();
    Some(QuickestRoute { throws: cells.len() as u32 - 1, cells })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConnectorKind;

    #[test]
    fn parses_path_notation() {
        let paths = parse_paths("32,62 42,68  12,98\n").unwrap();
        assert_eq!(
            paths,
            vec![
                Path { src: 32, dst: 62 },
                Path { src: 42, dst: 68 },
                Path { src: 12, dst: 98 },
            ]
        );
        assert!(parse_paths("").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_token() {
        match parse_paths("3,7 22-54") {
            Err(BoardError::PathToken(t)) => assert_eq!(t, "22-54"),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(parse_paths("3,x").is_err());
    }

    #[test]
    fn sample_matches_its_path_notation() {
        let sample = sample_board();
        assert_eq!(sample.ladders, parse_paths("32,62 42,68 12,98").unwrap());
        assert_eq!(
            sample.snakes,
            parse_paths("95,13 97,25 93,37 79,27 75,19 49,47 67,17").unwrap()
        );
    }

    #[test]
    fn inline_board_reads_host_attributes() {
        let attr = |name: &str| match name {
            "data-ladders" => Some("3,7".to_string()),
            "data-snakes" => Some("22,5 40,1".to_string()),
            _ => None,
        };
        let board = inline_board(attr).unwrap().unwrap();
        assert_eq!(board.ladders, vec![Path { src: 3, dst: 7 }]);
        assert_eq!(board.snakes.len(), 2);
        assert_eq!(inline_board(|_: &str| None).unwrap(), None);
        assert!(inline_board(|_: &str| Some("oops".to_string())).is_err());
    }

    #[test]
    fn pristine_board_offers_six_moves() {
        let g = MoveGraph::pristine(100);
        let from_one: Vec<_> = g.moves_from(1).collect();
        assert_eq!(from_one, vec![(2, 1), (3, 2), (4, 3), (5, 4), (6, 5), (7, 6)]);
        assert_eq!(g.moves_from(97).count(), 3);
        assert_eq!(g.moves_from(100).count(), 0);
    }

    #[test]
    fn pristine_board_takes_seventeen_throws() {
        let route = quickest_route(&MoveGraph::pristine(100)).unwrap();
        assert_eq!(route.throws, 17);
        assert_eq!(route.cells.first(), Some(&1));
        assert_eq!(route.cells.last(), Some(&100));
    }

    #[test]
    fn sample_board_quickest_way_up() {
        let g = MoveGraph::pristine(100).with_connectors(&sample_board().connectors());
        let route = quickest_route(&g).unwrap();
        // 1 -> 12 (ladder 98) costs two throws, then 98 -> 100 one more
        assert_eq!(route.throws, 3);
        assert!(route.cells.contains(&98));
    }

    #[test]
    fn ladder_redirects_landing_cell() {
        let ladder = Connector { src: 3, dst: 50, kind: ConnectorKind::Ladder };
        let g = MoveGraph::pristine(100).with_connectors(&[ladder]);
        assert!(g.moves_from(1).any(|(to, face)| to == 50 && face == 2));
        assert!(!g.moves_from(1).any(|(to, _)| to == 3));
    }

    #[test]
    fn walled_in_board_is_unreachable() {
        let snakes: Vec<Connector> = (2..=7)
            .map(|src| Connector { src, dst: 1, kind: ConnectorKind::Snake })
            .collect();
        let g = MoveGraph::pristine(100).with_connectors(&snakes);
        assert_eq!(quickest_route(&g), None);
    }

    #[test]
    fn off_board_connectors_are_ignored() {
        let bad = [
            Connector { src: 2, dst: 400, kind: ConnectorKind::Ladder },
            Connector { src: 5, dst: -3, kind: ConnectorKind::Snake },
        ];
        let g = MoveGraph::pristine(100).with_connectors(&bad);
        assert_eq!(g, MoveGraph::pristine(100));
    }
}
