use anyhow::Result;
use cricket_core::model::{Action, Delivery, MatchResult, Mode};
use cricket_core::stats::CareerStats;
use cricket_core::state::{Match, Snapshot};
use std::io::{self, Write};

const COMMENTARY_TAIL: usize = 8;

/// What the player picked on the menu screen.
pub enum MenuChoice {
    Play(Mode),
    Stats,
    Quit,
}

/// What to do once a match is over.
pub enum AfterMatch {
    Replay,
    Menu,
    Quit,
}

pub fn prompt_menu() -> Result<MenuChoice> {
    clear_screen();
    println!("=== CRICKET ===");
    println!(" 1: Batting   (chase a target)");
    println!(" 2: Bowling   (defend a target)");
    println!(" 3: Full match (10 overs per side)");
    println!(" s: Career stats");
    println!(" q: Quit");
    loop {
        let input = read_line()?;
        match input.trim() {
            "1" => return Ok(MenuChoice::Play(Mode::Batting)),
            "2" => return Ok(MenuChoice::Play(Mode::Bowling)),
            "3" => return Ok(MenuChoice::Play(Mode::FullMatch)),
            "s" | "S" => return Ok(MenuChoice::Stats),
            "q" | "Q" | "" => return Ok(MenuChoice::Quit),
            other => match other.parse::<Mode>() {
                Ok(mode) => return Ok(MenuChoice::Play(mode)),
                Err(err) => println!("{err}. Pick 1, 2, 3, s or q."),
            },
        }
    }
}

/// Toss won: returns true to bat first.
pub fn prompt_toss() -> Result<bool> {
    println!();
    println!("You won the toss! 1: bat first  2: bowl first");
    loop {
        match read_line()?.trim() {
            "1" | "bat" => return Ok(true),
            "2" | "bowl" => return Ok(false),
            _ => println!("Pick 1 or 2."),
        }
    }
}

pub fn render(state: &Match) {
    let view = state.snapshot();
    clear_screen();
    println!("=== {} ===", headline(state));
    println!(
        "Score: {}/{}   Overs: {} / {}",
        view.runs,
        view.wickets,
        view.overs_text,
        state.rules().overs_per_innings
    );
    if let Some(target) = view.target {
        if !view.game_over {
            let balls_left = state
                .rules()
                .overs_per_innings
                .saturating_mul(state.rules().balls_per_over)
                .saturating_sub(state.current_innings().balls_bowled(state.rules()));
            println!(
                "Target: {}   Need {} from {} balls",
                target,
                target.saturating_sub(view.runs),
                balls_left
            );
        }
    }
    if state.mode() == Mode::FullMatch && state.innings_index() == 1 {
        println!("First innings: {}", state.first_innings().score_text());
    }
    if let Some(mood) = view.mood {
        println!("Batsman looks {mood}");
    }
    match (&view.last_result, view.is_resolving) {
        (_, true) => println!("\n  ... the ball is on its way ..."),
        (Some(result), false) => println!("\n  >> {result} <<"),
        (None, false) => println!(),
    }
    if let Some(ball) = view.trajectory {
        println!("  ({:?} to {}, {:+.0}/{:+.0})", ball.distance, ball.direction, ball.x, ball.y);
    }
    println!();
    println!("--- Commentary ---");
    let lines = state.commentary();
    for line in &lines[lines.len().saturating_sub(COMMENTARY_TAIL)..] {
        println!("  {line}");
    }
    println!();
}

fn headline(state: &Match) -> String {
    match state.mode() {
        Mode::Batting => "BATTING".to_string(),
        Mode::Bowling => "BOWLING".to_string(),
        Mode::FullMatch => {
            let role = if state.player_batting() {
                "you are batting"
            } else if state.player_bowling() {
                "you are bowling"
            } else {
                "complete"
            };
            let innings = if state.innings_index() == 0 { "1st" } else { "2nd" };
            format!("FULL MATCH | {innings} innings | {role}")
        }
    }
}

pub fn prompt_shot(incoming: Option<Delivery>) -> Result<Action> {
    if let Some(delivery) = incoming {
        println!("Incoming: {delivery}!");
    }
    println!("Choose your shot:");
    for (i, action) in Action::ALL.iter().enumerate() {
        println!(
            " {}: {:<10} risk {:<6} {}",
            i + 1,
            action.name(),
            action.risk(),
            shot_tip(*action)
        );
    }
    loop {
        let input = read_line()?;
        let trimmed = input.trim();
        if let Ok(choice) = trimmed.parse::<usize>() {
            if (1..=Action::ALL.len()).contains(&choice) {
                return Ok(Action::ALL[choice - 1]);
            }
        }
        match trimmed.parse::<Action>() {
            Ok(action) => return Ok(action),
            Err(err) => println!("{err}. Pick 1-6."),
        }
    }
}

pub fn prompt_delivery() -> Result<Delivery> {
    println!("Choose your delivery:");
    for (i, delivery) in Delivery::ALL.iter().enumerate() {
        println!(" {}: {:<11} {}", i + 1, delivery.name(), delivery_tip(*delivery));
    }
    loop {
        let input = read_line()?;
        let trimmed = input.trim();
        if let Ok(choice) = trimmed.parse::<usize>() {
            if (1..=Delivery::ALL.len()).contains(&choice) {
                return Ok(Delivery::ALL[choice - 1]);
            }
        }
        match trimmed.parse::<Delivery>() {
            Ok(delivery) => return Ok(delivery),
            Err(err) => println!("{err}. Pick 1-6."),
        }
    }
}

fn shot_tip(action: Action) -> &'static str {
    match action {
        Action::Defensive => "Safe against all",
        Action::Drive => "Good vs full balls",
        Action::Pull => "Best vs bouncers",
        Action::Cut => "For wide deliveries",
        Action::Sweep => "Spin killer",
        Action::Slog => "High risk, high reward",
    }
}

fn delivery_tip(delivery: Delivery) -> &'static str {
    match delivery {
        Delivery::Yorker => "Toe-crusher",
        Delivery::Bouncer => "Short & fast",
        Delivery::Spin => "Turn & flight",
        Delivery::Outswinger => "Away swing",
        Delivery::Inswinger => "Into pads",
        Delivery::Slower => "Change of pace",
    }
}

pub fn print_game_over(view: &Snapshot, state: &Match) {
    let title = match view.result {
        Some(MatchResult::Win) => "You Won!",
        Some(MatchResult::Loss) => "You Lost!",
        Some(MatchResult::Draw) | None => "Match Drawn",
    };
    println!("=== {title} ===");
    if let (Mode::Batting, Some(target)) = (state.mode(), view.target) {
        let wickets_left = state.rules().wickets_per_innings.saturating_sub(view.wickets);
        match view.result {
            Some(MatchResult::Win) => {
                println!("Chased down {target} with {wickets_left} wickets remaining!")
            }
            Some(MatchResult::Loss) => {
                println!("Fell short by {} runs", target.saturating_sub(view.runs))
            }
            _ => {}
        }
    }
    if state.mode() == Mode::FullMatch {
        println!(
            "First innings {}  |  Second innings {}",
            state.first_innings().score_text(),
            state.second_innings().score_text()
        );
    } else {
        println!("Final score {}/{} ({} overs)", view.runs, view.wickets, view.overs_text);
    }
}

pub fn prompt_after_match() -> Result<AfterMatch> {
    println!();
    println!(" r: Play again   m: Menu   q: Quit");
    loop {
        match read_line()?.trim() {
            "r" | "R" => return Ok(AfterMatch::Replay),
            "m" | "M" => return Ok(AfterMatch::Menu),
            "q" | "Q" | "" => return Ok(AfterMatch::Quit),
            _ => println!("Pick r, m or q."),
        }
    }
}

pub fn print_stats(stats: &CareerStats) {
    println!("=== Career stats ===");
    println!();
    println!("Batting");
    println!("  Innings        {}", stats.batting_innings);
    println!("  Total runs     {}", stats.total_runs_scored);
    println!("  Highest score  {}", stats.highest_score);
    println!("  Average        {}", stats.batting_average());
    println!("  Strike rate    {}", stats.strike_rate());
    println!("  Times out      {}", stats.times_out);
    println!("  4s / 6s        {} / {}", stats.fours, stats.sixes);
    println!("  Win/Loss       {}/{}", stats.batting_wins, stats.batting_losses);
    println!();
    println!("Bowling");
    println!("  Innings        {}", stats.bowling_innings);
    println!("  Wickets        {}", stats.total_wickets_taken);
    println!("  Runs conceded  {}", stats.total_runs_conceded);
    println!("  Economy        {}", stats.economy());
    println!("  Average        {}", stats.bowling_average());
    println!("  Best bowling   {}", stats.best_bowling_text());
    println!("  Win/Loss       {}/{}", stats.bowling_wins, stats.bowling_losses);
    println!();
    println!("Full matches");
    println!("  Played         {}", stats.full_matches_played);
    println!("  Won            {}", stats.full_match_wins);
    println!("  Lost           {}", stats.full_match_losses);
}

pub fn wait_for_enter() -> Result<()> {
    println!();
    println!("(press Enter)");
    read_line()?;
    Ok(())
}

fn clear_screen() {
    print!("\x1b[2J\x1b[H");
    let _ = io::stdout().flush();
}

fn read_line() -> Result<String> {
    let mut buf = String::new();
    io::stdout().flush()?;
    if io::stdin().read_line(&mut buf)? == 0 {
        anyhow::bail!("input closed");
    }
    Ok(buf)
}
