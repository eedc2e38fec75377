//! Curated commentary lines, keyed by `"<Shot or Delivery>:<outcome code>"`.

use crate::model::{Action, Delivery, Outcome};
use crate::source::BallSource;
use phf::phf_map;

static SHOT_PHRASES: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "Defensive:0" => &["Solid defense!", "Well blocked!", "Safe shot there."],
    "Defensive:1" => &["Quick single taken!", "Good running between the wickets!"],
    "Defensive:2" => &["Pushed for two!", "Excellent running!"],
    "Defensive:W" => &["Caught behind! The defensive prod didn't work.", "Trapped LBW!"],
    "Drive:0" => &["Drives, but straight to the fielder.", "Good shot, no run."],
    "Drive:1" => &["Lovely drive for one!", "Elegant stroke!"],
    "Drive:2" => &["Driven through the gap for two!"],
    "Drive:4" => &["FOUR! Beautiful cover drive!", "FOUR! Timing was impeccable!"],
    "Drive:W" => &["Edged and caught! The drive was too early.", "Clean bowled!"],
    "Pull:0" => &["Pulls, but can't beat the fielder."],
    "Pull:1" => &["Pulled away for a single."],
    "Pull:2" => &["Pulled through midwicket for two!"],
    "Pull:4" => &["FOUR! Powerful pull shot!"],
    "Pull:6" => &["SIX! Massive pull into the stands!", "HUGE SIX over midwicket!"],
    "Pull:W" => &["Top edge! Caught at fine leg!", "Mistimed pull, caught!"],
    "Cut:0" => &["Cut shot finds the fielder."],
    "Cut:1" => &["Late cut for one."],
    "Cut:2" => &["Cut through point for two!"],
    "Cut:4" => &["FOUR! Slashed hard past point!", "FOUR! Square cut races away!"],
    "Cut:W" => &["Sliced to gully! Poor shot selection.", "Caught at slip!"],
    "Sweep:0" => &["Sweeps but can't find the gap."],
    "Sweep:1" => &["Sweep for a single."],
    "Sweep:2" => &["Swept fine for two runs."],
    "Sweep:4" => &["FOUR! Swept powerfully!", "FOUR! Fine sweep!"],
    "Sweep:6" => &["SIX! Slog swept into the crowd!", "HUGE SIX over long leg!"],
    "Sweep:W" => &["Swept in the air and caught!", "Top edge, keeper takes it!"],
    "Slog:0" => &["Big swing, misses completely!"],
    "Slog:1" => &["Mistimed slog, just a single."],
    "Slog:2" => &["Slogged for two."],
    "Slog:4" => &["FOUR! Slogged over the infield!"],
    "Slog:6" => &["SIX! Slogged out of the ground!", "MASSIVE SIX! What a hit!"],
    "Slog:W" => &["Caught at long-on! The slog didn't pay off.", "Bowled! Huge swing and a miss!"],
};

static DELIVERY_PHRASES: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "Yorker:0" => &["Perfect yorker! Batsman can't get under it.", "Toe-crushing yorker, dot ball!"],
    "Yorker:1" => &["Yorker dug out for a single.", "Just managed to squeeze it away."],
    "Yorker:2" => &["Flicked off the toes for two!", "Smart work to get two off a yorker."],
    "Yorker:4" => &["FOUR! Somehow got it away!", "FOUR! Incredible shot off the yorker!"],
    "Yorker:6" => &["SIX! Scooped over the keeper!", "MASSIVE! Picked the yorker perfectly!"],
    "Yorker:W" => &["BOWLED! Yorker crashes into the stumps!", "CLEAN BOWLED! What a delivery!"],
    "Bouncer:0" => &["Bouncer! Ducked under it.", "Short ball, well evaded."],
    "Bouncer:1" => &["Pulled but found the fielder, just one.", "Glanced down to fine leg."],
    "Bouncer:2" => &["Pulled through square for two!", "Hooked away for a couple."],
    "Bouncer:4" => &["FOUR! Pulled powerfully!", "FOUR! Hooked in front of square!"],
    "Bouncer:6" => &["SIX! Hooked into the stands!", "HUGE SIX! Pulled over deep midwicket!"],
    "Bouncer:W" => &["CAUGHT! Top edge off the bouncer!", "Hooked straight to fine leg!"],
    "Spin:0" => &["Good spin, defended back.", "Turn and bounce, well played out."],
    "Spin:1" => &["Worked away for one.", "Pushed into the gap for a single."],
    "Spin:2" => &["Swept fine for two runs.", "Driven through the covers for two."],
    "Spin:4" => &["FOUR! Swept powerfully!", "FOUR! Stepped out and drove!"],
    "Spin:6" => &["SIX! Danced down and launched!", "HUGE SIX over long-on!"],
    "Spin:W" => &["STUMPED! Beaten by the turn!", "BOWLED! Through the gate!"],
    "Outswinger:0" => &["Outswinger, left alone.", "Shaped away, no shot offered."],
    "Outswinger:1" => &["Pushed through covers for one.", "Guided to third man."],
    "Outswinger:2" => &["Driven through the gap for two.", "Timing through the off side."],
    "Outswinger:4" => &["FOUR! Driven beautifully!", "FOUR! Timed through covers!"],
    "Outswinger:6" => &["SIX! Lofted over extra cover!", "Incredible six off an outswinger!"],
    "Outswinger:W" => &["CAUGHT BEHIND! Nicked the outswinger!", "Edged and gone! Keeper takes it!"],
    "Inswinger:0" => &["Inswinger, played defensively.", "Good delivery, well blocked."],
    "Inswinger:1" => &["Tucked off the pads for one.", "Worked away to leg side."],
    "Inswinger:2" => &["Flicked through midwicket for two.", "Whipped through square leg."],
    "Inswinger:4" => &["FOUR! Flicked off the pads!", "FOUR! Through the leg side!"],
    "Inswinger:6" => &["SIX! Pulled over the infield!", "Massive six over midwicket!"],
    "Inswinger:W" => &["LBW! Trapped in front!", "BOWLED through the gate! Beauty!"],
    "Slower:0" => &["Slower ball, mistimed into the ground.", "Fooled by the change of pace."],
    "Slower:1" => &["Pushed away for a single.", "Just about got bat on it."],
    "Slower:2" => &["Found the gap for two.", "Adjusted and got it through."],
    "Slower:4" => &["FOUR! Read it and hammered it!", "FOUR! Waited and punished it!"],
    "Slower:6" => &["SIX! Picked the slower ball perfectly!", "HUGE SIX! Destroyed that one!"],
    "Slower:W" => &["CAUGHT! Mistimed the slower ball!", "Skied it! Easy catch for the fielder!"],
};

/// What the commentary line is about.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Subject {
    Shot(Action),
    Delivery(Delivery),
}

impl Subject {
    pub fn name(self) -> &'static str {
        match self {
            Subject::Shot(action) => action.name(),
            Subject::Delivery(delivery) => delivery.name(),
        }
    }

    fn pool(self, outcome: Outcome) -> Option<&'static [&'static str]> {
        let key = format!("{}:{}", self.name(), outcome.code());
        let phrases = match self {
            Subject::Shot(_) => &SHOT_PHRASES,
            Subject::Delivery(_) => &DELIVERY_PHRASES,
        };
        phrases.get(key.as_str()).copied()
    }
}

/// One line of commentary for the ball, drawn uniformly from the curated
/// pool, or a generic line when no pool exists for the pair.
pub fn phrase<S: BallSource + ?Sized>(subject: Subject, outcome: Outcome, source: &mut S) -> String {
    match subject.pool(outcome) {
        Some(pool) if !pool.is_empty() => pool[source.pick(pool.len())].to_string(),
        _ => {
            let runs = outcome.runs();
            let plural = if runs == 1 { "" } else { "s" };
            format!("{} for {} run{}", subject.name(), runs, plural)
        }
    }
}
