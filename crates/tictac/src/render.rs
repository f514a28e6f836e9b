//! Plain-text board rendering.

use tictac_engine::{Coord, GameEngine, GameState, Player, TileState};

/// Symbol shown for a player's mark.
pub fn mark_symbol(player: Player) -> char {
    match player {
        Player::One => 'X',
        Player::Two => 'O',
    }
}

/// Renders the board, the round status and the score.
///
/// Blank tiles show their 1-based cell number so players can type it.
/// Tiles on the winning line are bracketed.
pub fn render_board(engine: &GameEngine) -> String {
    let n = engine.board_size();
    let width = (n * n).to_string().len();
    let winning = engine.winning_line();

    let mut out = String::new();
    for row in 0..n {
        let cells: Vec<String> = (0..n)
            .map(|col| {
                let coord = Coord::new(row, col);
                let label = match engine.board().get(coord) {
                    Some(TileState::PlayerOne) => mark_symbol(Player::One).to_string(),
                    Some(TileState::PlayerTwo) => mark_symbol(Player::Two).to_string(),
                    _ => (coord.to_index(n) + 1).to_string(),
                };
                if winning.is_some_and(|line| line.contains(coord, n)) {
                    format!("[{:>width$}]", label)
                } else {
                    format!(" {:>width$} ", label)
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');

        if row + 1 < n {
            let separator = vec!["-".repeat(width + 2); n].join("+");
            out.push_str(&separator);
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str(&status_line(engine));
    out.push('\n');
    let wins = engine.wins();
    out.push_str(&format!(
        "Score: {} (X) {} - {} {} (O)\n",
        Player::One,
        wins.player_one,
        wins.player_two,
        Player::Two
    ));
    out
}

/// One-line summary of the round.
pub fn status_line(engine: &GameEngine) -> String {
    match engine.state() {
        GameState::InProgress => {
            let player = engine.active_player();
            format!("{} to move ({})", player, mark_symbol(player))
        }
        state => state.to_string(),
    }
}
