use anyhow::{bail, Context, Result};
use bitreversi::bench;
use bitreversi::config::{GameConfig, Mode};
use bitreversi::console;
use bitreversi::game::{Game, GameStatus};
use bitreversi::player::{Player, PlayerType};
use bitreversi::stats::GameStats;
use std::io::{self, Write};
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    // ログの初期化（RUST_LOG で上書きできる）
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bitreversi=info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let config = GameConfig::from_args(std::env::args().skip(1))
        .context("コマンドライン引数を解釈できません")?;
    info!(?config, "起動");

    match config.mode {
        Mode::Cli => run_cli_game(&config),
        Mode::QuickGame => run_quick_ai_game(&config),
        Mode::Bench => run_bench(&config),
    }
}

fn run_cli_game(config: &GameConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    // タイトル表示
    writeln!(output, "==========================")?;
    writeln!(output, "    ビット リバーシ")?;
    writeln!(output, "==========================")?;
    writeln!(
        output,
        "難易度: {} (深さ {})",
        config.difficulty.difficulty, config.difficulty.depth
    )?;
    writeln!(output, "・黒(X): {}", config.player_type(Player::Black))?;
    writeln!(output, "・白(O): {}", config.player_type(Player::White))?;

    let (mut game, report) = Game::new(config.difficulty);
    let mut game_stats = GameStats::new();
    writeln!(output, "\nゲーム開始！")?;
    console::present_report(&mut output, &report)?;

    while !game.is_over() {
        let mover = game.current_player();
        let start = Instant::now();

        let report = match config.player_type(mover) {
            PlayerType::Human => {
                console::prompt(&mut output, mover)?;
                let read = console::read_coordinate(&mut input, &mut output, game.board(), mover)
                    .context("入力の読み込みに失敗しました")?;
                match read {
                    Some(coordinate) => game.play_turn(Some(coordinate)),
                    None => {
                        writeln!(output, "プログラムを終了します。")?;
                        return Ok(());
                    }
                }
            }
            PlayerType::Ai => {
                writeln!(output, "{}(AI)が考えています...", mover)?;
                game.play_turn(None)
            }
        };
        let elapsed = start.elapsed();

        console::present_report(&mut output, &report)?;
        if report.status == GameStatus::Failed {
            if config.player_type(mover) == PlayerType::Ai {
                bail!("AI が {} の手を返しませんでした", mover);
            }
            continue;
        }

        if config.player_type(mover) == PlayerType::Ai {
            writeln!(output, "思考時間: {:.2?}", elapsed)?;
        }
        game_stats.record_report(mover, &report, elapsed);
    }

    // ゲーム終了
    writeln!(output, "\n==========================")?;
    writeln!(output, "      ゲーム終了")?;
    writeln!(output, "==========================")?;

    let (black_count, white_count) = game.piece_counts();
    let winner = game.board().get_winner();
    let game_result = game_stats.finalize_game(winner, black_count, white_count);
    game_stats.write_summary(&mut output, &game_result)?;
    Ok(())
}

/// AI 同士で1局
fn run_quick_ai_game(config: &GameConfig) -> Result<()> {
    if !config.difficulty.has_ai() {
        bail!("{} では AI 同士の対局はできません", config.difficulty.difficulty);
    }

    println!("==========================");
    println!("  クイックAI対戦");
    println!("==========================");
    println!(
        "AI ({}) vs AI ({}) で対戦します...",
        config.difficulty.difficulty, config.difficulty.difficulty
    );

    let (mut game, _) = Game::new(config.difficulty);
    let mut game_stats = GameStats::new();

    while !game.is_over() {
        let mover = game.current_player();
        let start = Instant::now();
        let report = game.play_turn(None);
        let elapsed = start.elapsed();

        if report.status == GameStatus::Failed {
            bail!("AI が {} の手を返しませんでした", mover);
        }
        game_stats.record_report(mover, &report, elapsed);

        let move_count = game_stats.get_move_count();
        if move_count % 5 == 0 {
            let (black_count, white_count) = game.piece_counts();
            println!(
                "{}手目完了 (黒:{}個 白:{}個) - 思考時間: {:.3}s",
                move_count,
                black_count,
                white_count,
                elapsed.as_secs_f64()
            );
        }
    }

    println!("{}", game.board());
    let (black_count, white_count) = game.piece_counts();
    let winner = game.board().get_winner();
    println!("\nクイックゲーム終了！");
    println!("最終スコア - 黒: {} 白: {}", black_count, white_count);
    match winner {
        Some(player) => println!("{}の勝ち！", player),
        None => println!("引き分け！"),
    }

    let game_result = game_stats.finalize_game(winner, black_count, white_count);
    game_stats
        .write_summary(&mut io::stdout().lock(), &game_result)
        .context("統計の出力に失敗しました")?;
    Ok(())
}

/// AI 同士の複数局を並列に実行
fn run_bench(config: &GameConfig) -> Result<()> {
    if !config.difficulty.has_ai() {
        bail!("{} ではベンチマークを実行できません", config.difficulty.difficulty);
    }

    let base_seed = config.seed.unwrap_or_else(rand::random);
    println!(
        "{}局を並列に実行します (難易度: {}, 深さ: {}, 序盤の無作為手: {}, シード: {})",
        config.games,
        config.difficulty.difficulty,
        config.difficulty.depth,
        config.random_plies,
        base_seed
    );

    let start = Instant::now();
    let summary = bench::run(config.difficulty, config.games, config.random_plies, base_seed);
    let wall_time = start.elapsed();

    for outcome in &summary.outcomes {
        let result = match outcome.winner {
            _ if !outcome.completed => "中断".to_string(),
            Some(player) => format!("{}の勝ち", player),
            None => "引き分け".to_string(),
        };
        println!(
            "シード {:>20}: {} (黒:{}個 白:{}個, {}手, {:.2?})",
            outcome.seed,
            result,
            outcome.black_count,
            outcome.white_count,
            outcome.moves,
            outcome.elapsed
        );
    }

    println!("\n==========================");
    println!("黒の勝ち: {}", summary.wins(Player::Black));
    println!("白の勝ち: {}", summary.wins(Player::White));
    println!("引き分け: {}", summary.draws());
    if summary.aborted() > 0 {
        warn!(aborted = summary.aborted(), "some games were aborted");
        println!("中断: {}", summary.aborted());
    }
    println!("1局あたりの平均時間: {:.2?}", summary.mean_time());
    println!("全体の所要時間: {:.2?}", wall_time);
    Ok(())
}
