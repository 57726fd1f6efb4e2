use crate::Algorithm;
use ninth_planet_api::{Card, Cards, Seat, SeatView};
use std::cmp::Reverse;

/// Plays for the team: wins tricks that hold its own task cards, feeds task
/// cards to the seats that need them, and otherwise stays under the current
/// winner.
#[derive(Default)]
pub struct DuckBot;

impl DuckBot {
    pub fn new() -> Self {
        Self
    }
}

impl Algorithm for DuckBot {
    fn select_task(&mut self, view: &SeatView) -> usize {
        let hand = view.player.hand;
        view.tasks
            .iter()
            .enumerate()
            .max_by_key(|(index, task)| (task_score(task.card, hand), Reverse(*index)))
            .map(|(index, _)| index)
            .unwrap_or(0)
    }

    fn signal(&mut self, _: &SeatView) -> Option<Card> {
        None
    }

    fn play(&mut self, view: &SeatView) -> Option<Card> {
        let cards = view.legal_plays();
        if cards.is_empty() {
            return None;
        }
        let mine = outstanding(view, |seat| seat == view.seat);
        let others = outstanding(view, |seat| seat != view.seat);
        if view.trick.is_empty() {
            return Some(lead(cards, mine, others));
        }
        let winners = cards
            .into_iter()
            .filter(|&card| wins(view, card))
            .collect::<Cards>();
        let losers = cards - winners;
        if view.trick.cards().contains_any(mine) && !winners.is_empty() {
            return Some(winners.min());
        }
        if winners.contains_any(mine) {
            return Some((winners & mine).max());
        }
        if let Some(winner) = view.trick.winner(view.seats()) {
            let gifts = losers & outstanding(view, |seat| seat == winner);
            if !gifts.is_empty() {
                return Some(gifts.max());
            }
        }
        let safe = losers - mine - others;
        if !safe.is_empty() {
            return Some(safe.max());
        }
        let safe = cards - mine - others;
        if !safe.is_empty() {
            return Some(safe.min());
        }
        Some(cards.min())
    }
}

fn task_score(card: Card, hand: Cards) -> usize {
    let suit = hand.of_suit(card.suit());
    let higher = suit.into_iter().filter(|c| c.value() > card.value()).count();
    let held = if hand.contains(card) { 20 } else { 0 };
    held + 5 * higher + suit.len()
}

/// Outstanding task cards of every seat matching `owner`.
fn outstanding<F>(view: &SeatView, owner: F) -> Cards
where
    F: Fn(Seat) -> bool,
{
    Seat::all(view.seats())
        .filter(|&seat| owner(seat))
        .flat_map(|seat| view.team[seat.idx()].tasks.iter())
        .filter(|task| !task.complete)
        .map(|task| task.card)
        .collect()
}

fn lead(cards: Cards, mine: Cards, others: Cards) -> Card {
    for card in mine & cards {
        let suit = cards.of_suit(card.suit());
        if suit.max() != card {
            return suit.max();
        }
    }
    let quiet = cards - mine - others - Cards::ROCKETS;
    if !quiet.is_empty() {
        return quiet.min();
    }
    cards.min()
}

/// Whether playing `card` would make this seat the current winner.
fn wins(view: &SeatView, card: Card) -> bool {
    let mut trick = view.trick.clone();
    trick.push(card);
    trick.winner(view.seats()) == Some(view.seat)
}
