//! Caro engine CLI
//!
//! A command-line demo of the engine: a few tactical checks followed by
//! an AI-vs-AI game played through the background worker.
//! Set `RUST_LOG=debug` to see search summaries.

use std::time::Duration;

use caro::{
    AIEngine, Board, Difficulty, GameState, GameStatus, Outcome, Player, Pos, ThinkingTask,
};

/// Upper bound on waiting for one AI move
const MOVE_TIMEOUT: Duration = Duration::from_secs(10);

fn main() {
    env_logger::init();

    println!("===========================================");
    println!("          Caro Engine v0.1.0");
    println!("===========================================\n");

    let mut engine = AIEngine::new(Player::Second);

    // Test 1: Find winning move
    println!("--- Test 1: Find Winning Move ---");
    test_winning_move(&mut engine);

    // Test 2: Block opponent win
    println!("\n--- Test 2: Block Opponent Win ---");
    test_block_opponent(&mut engine);

    // Test 3: Opening response
    println!("\n--- Test 3: Opening Response ---");
    test_opening_response(&mut engine);

    // Test 4: Full game
    println!("\n--- Test 4: AI vs AI (7x7, four in a row) ---");
    play_ai_game();

    println!("\n===========================================");
    println!("          All Tests Completed!");
    println!("===========================================");
}

fn test_winning_move(engine: &mut AIEngine) {
    let Ok(mut board) = Board::new(7, 4) else {
        println!("  Result: FAIL - Bad board config");
        return;
    };
    // O has 3 in a row, needs one more
    for col in 0..3 {
        board.apply_move(Pos::new(3, col), Player::Second);
    }
    board.apply_move(Pos::new(0, 0), Player::First);
    board.apply_move(Pos::new(6, 6), Player::First);

    let result = engine.get_move_with_stats(&board, 4, Difficulty::Medium);
    report(&result, "Position: O has 3 at row 3, cols 0-2", Pos::new(3, 3), "Immediate Win");
}

fn test_block_opponent(engine: &mut AIEngine) {
    let Ok(mut board) = Board::new(6, 4) else {
        println!("  Result: FAIL - Bad board config");
        return;
    };
    // X has 3 in a row, O must block
    for col in 0..3 {
        board.apply_move(Pos::new(0, col), Player::First);
    }
    board.apply_move(Pos::new(4, 4), Player::Second);
    board.apply_move(Pos::new(5, 5), Player::Second);

    let result = engine.get_move_with_stats(&board, 4, Difficulty::Hard);
    report(&result, "Position: X has 3 at row 0, cols 0-2", Pos::new(0, 3), "Defense");
}

fn test_opening_response(engine: &mut AIEngine) {
    let Ok(mut board) = Board::new(10, 5) else {
        println!("  Result: FAIL - Bad board config");
        return;
    };
    board.apply_move(Pos::new(5, 5), Player::First);

    let result = engine.get_move_with_stats(&board, 5, Difficulty::Medium);

    if let Some(m) = result.best_move {
        println!("  Position: X at (5, 5)");
        println!("  O responds: {m}");
        println!("  Source: {:?}", result.source);
        println!("  Time: {}ms", result.time_ms);
        println!("  Nodes: {}", result.nodes);

        let dr = (m.row as i32 - 5).abs();
        let dc = (m.col as i32 - 5).abs();
        if dr <= 2 && dc <= 2 {
            println!("  Result: PASS - Near the opening stone");
        } else {
            println!("  Result: QUESTIONABLE - Far from the opening stone");
        }
    } else {
        println!("  Result: FAIL - No move found");
    }
}

fn report(result: &caro::MoveResult, position: &str, expected: Pos, label: &str) {
    if let Some(m) = result.best_move {
        println!("  {position}");
        println!("  AI plays: {m}");
        println!("  Source: {:?}", result.source);
        println!("  Time: {}ms", result.time_ms);
        println!("  Expected: {expected} - {label}");
        if m == expected {
            println!("  Result: PASS");
        } else {
            println!("  Result: FAIL - Wrong move");
        }
    } else {
        println!("  Result: FAIL - No move found");
    }
}

fn play_ai_game() {
    let mut game = match GameState::new(7, 4) {
        Ok(game) => game,
        Err(e) => {
            println!("  Result: FAIL - {e}");
            return;
        }
    };
    let difficulty = |player: Player| match player {
        Player::First => Difficulty::Medium,
        Player::Second => Difficulty::Hard,
    };

    while !game.is_finished() {
        let player = game.current_player();
        let task = ThinkingTask::spawn(
            game.board().clone(),
            player,
            game.win_condition(),
            difficulty(player),
        );
        let result = match task.wait(MOVE_TIMEOUT) {
            Ok(result) => result,
            Err(e) => {
                println!("  Result: FAIL - {e}");
                return;
            }
        };
        let Some(pos) = result.best_move else {
            println!("  Result: FAIL - No move found");
            return;
        };
        if !game.make_move(pos) {
            println!("  Result: FAIL - Illegal move {pos}");
            return;
        }
        println!(
            "  {:>2}. {} ({}) plays {pos} [{:?}, {} nodes, {}ms]",
            game.move_count(),
            player,
            difficulty(player),
            result.source,
            result.nodes,
            result.time_ms
        );
    }

    print_board(game.board());
    match game.status() {
        GameStatus::Finished(Outcome::Win(p)) => {
            let line: Vec<String> = game.get_winning_sequence().iter().map(Pos::to_string).collect();
            println!("  Winner: {p} with {}", line.join(" "));
        }
        GameStatus::Finished(Outcome::Draw) => println!("  Draw"),
        _ => println!("  Result: FAIL - Game stopped early"),
    }
    println!(
        "  Score: X {} - O {}",
        game.scores().get(Player::First),
        game.scores().get(Player::Second)
    );
}

fn print_board(board: &Board) {
    for row in 0..board.size() {
        let line: String = (0..board.size())
            .map(|col| match board.get(Pos::new(row as u8, col as u8)) {
                Some(caro::Cell::Stone(p)) => p.symbol(),
                _ => '.',
            })
            .flat_map(|c| [c, ' '])
            .collect();
        println!("  {}", line.trim_end());
    }
}
