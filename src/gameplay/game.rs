use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::street::Street;
use crate::evaluation::evaluator::classify;
use crate::evaluation::showdown::winners;
use crate::evaluation::strength::Strength;

pub const MIN_SEATS: usize = 2;
pub const MAX_SEATS: usize = 22; // the classic cap: two cards each plus burns and board from one deck

/// One dealt hand of Texas Hold'em, from hole cards to showdown.
///
/// The Game owns its Deck, holes, and board outright; nothing is shared
/// across instances. It never bets. It deals and reveals streets, then
/// hands the evaluation core a 7-card Hand per seat.
pub struct Game {
    deck: Deck,
    holes: Vec<Hole>,
    board: Hand,
    street: Street,
}

impl Game {
    pub fn new(seats: usize) -> Self {
        assert!(
            (MIN_SEATS..=MAX_SEATS).contains(&seats),
            "a table seats {} to {} players, not {}",
            MIN_SEATS,
            MAX_SEATS,
            seats
        );
        let mut deck = Deck::new();
        let holes = (0..seats).map(|_| deck.hole()).collect();
        Self {
            deck,
            holes,
            board: Hand::empty(),
            street: Street::Pref,
        }
    }

    pub fn street(&self) -> Street {
        self.street
    }
    pub fn board(&self) -> Hand {
        self.board
    }
    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    /// advance one street, turning over its community cards
    pub fn reveal(&mut self) {
        self.street = self.street.next();
        let reveal = (0..self.street.n_revealed())
            .map(|_| self.deck.draw())
            .map(u64::from)
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add);
        self.board = Hand::add(self.board, reveal);
        log::info!("{:<8} {}", self.street, self.board);
    }

    /// each seat's seven cards, classified
    pub fn strengths(&self) -> Vec<Strength> {
        assert!(self.street == Street::Rive, "showdown happens on the river");
        self.holes
            .iter()
            .map(|&hole| Hand::add(Hand::from(hole), self.board))
            .map(|hand| Vec::<Card>::from(hand))
            .map(|cards| classify(&cards).expect("dealt hands hold 7 distinct cards"))
            .collect()
    }

    /// settle the table: classify every seat, return the winning seats
    pub fn showdown(&self) -> Vec<usize> {
        let strengths = self.strengths();
        for (seat, strength) in strengths.iter().enumerate() {
            log::debug!("seat {:<3} {} {}", seat, self.holes[seat], strength);
        }
        winners(&strengths).expect("a table is never empty")
    }
}
