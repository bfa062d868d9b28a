use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use goscore::config::ScoringConfig;
use goscore::scoring::{GameRecord, ScoreResult, Side};
use goscore::GsResult;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub black_wins: usize,
    pub white_wins: usize,
    pub draws: usize,
    pub errors: usize,
}

impl Tally {
    pub fn from_results(results: &[GsResult<ScoreResult>]) -> Self {
        let mut tally = Tally::default();
        for result in results {
            match result {
                Ok(r) => match r.winner() {
                    Some(Side::Black) => tally.black_wins += 1,
                    Some(Side::White) => tally.white_wins += 1,
                    None => tally.draws += 1,
                },
                Err(_) => tally.errors += 1,
            }
        }
        tally
    }
}

pub fn print_results_table(
    games: &[GameRecord],
    results: &[GsResult<ScoreResult>],
    config: &ScoringConfig,
) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Game").add_attribute(Attribute::Bold),
        Cell::new("Method"),
        Cell::new("Komi"),
        Cell::new("Margin"),
        Cell::new("Result").add_attribute(Attribute::Bold),
    ]);

    for i in 2..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (game, result) in games.iter().zip(results) {
        let method = game
            .method
            .clone()
            .unwrap_or_else(|| config.method.to_string());
        let komi = game.komi.unwrap_or(config.komi);

        let row = match result {
            Ok(r) => {
                let color = match r.winner() {
                    Some(Side::Black) => Color::Cyan,
                    Some(Side::White) => Color::Yellow,
                    None => Color::Grey,
                };
                vec![
                    Cell::new(&game.name).add_attribute(Attribute::Bold),
                    Cell::new(method),
                    Cell::new(komi),
                    Cell::new(r.margin),
                    Cell::new(&r.label).fg(color),
                ]
            }
            Err(e) => vec![
                Cell::new(&game.name).add_attribute(Attribute::Bold),
                Cell::new(method),
                Cell::new(komi),
                Cell::new("-"),
                Cell::new(e).fg(Color::Red),
            ],
        };
        table.add_row(row);
    }
    println!("\n{}", table);
}

pub fn print_summary(tally: &Tally) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Black wins").fg(Color::Cyan),
        Cell::new("White wins").fg(Color::Yellow),
        Cell::new("Draws"),
        Cell::new("Errors").fg(Color::Red),
    ]);
    table.add_row(vec![
        Cell::new(tally.black_wins),
        Cell::new(tally.white_wins),
        Cell::new(tally.draws),
        Cell::new(tally.errors),
    ]);
    println!("{}", table);
}
