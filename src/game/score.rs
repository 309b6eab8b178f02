use super::Seat;

/// Cumulative results across rounds, plus the names shown for each seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBoard {
    names: [String; 2],
    wins: [u32; 2],
    ties: u32,
}

impl ScoreBoard {
    pub fn new(player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        ScoreBoard {
            names: [player_one.into(), player_two.into()],
            wins: [0, 0],
            ties: 0,
        }
    }

    pub fn name(&self, seat: Seat) -> &str {
        &self.names[seat.index()]
    }

    pub fn wins(&self, seat: Seat) -> u32 {
        self.wins[seat.index()]
    }

    pub fn ties(&self) -> u32 {
        self.ties
    }

    pub fn record_win(&mut self, seat: Seat) {
        self.wins[seat.index()] += 1;
    }

    pub fn record_tie(&mut self) {
        self.ties += 1;
    }

    /// One line per seat, e.g. `Player 1 has 1 point.`
    pub fn status(&self) -> String {
        format!(
            "{}\n{}",
            self.seat_status(Seat::One),
            self.seat_status(Seat::Two)
        )
    }

    fn seat_status(&self, seat: Seat) -> String {
        let wins = self.wins(seat);
        let unit = if wins == 1 { "point" } else { "points" };
        format!("{} has {} {}.", self.name(seat), wins, unit)
    }

    pub fn winner_message(&self, seat: Seat) -> String {
        format!("{}  Won!\n{}", self.name(seat), self.status())
    }

    pub fn tie_message(&self) -> String {
        format!("It's a tie!\n{}", self.status())
    }
}
