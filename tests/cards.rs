//! Card, deck, hand and player tests.

use hitstand::{
    BetError, Card, CardError, DECK_SIZE, Dealer, Deck, DeckError, Hand, HumanPlayer, Participant,
    Suit, Wagering,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn card(rank: u8, suit: Suit) -> Card {
    Card::new(rank, Some(suit)).unwrap()
}

#[test]
fn every_rank_and_suit_builds() {
    for rank in 1..=13 {
        for suit in Suit::ALL {
            let card = Card::new(rank, Some(suit)).unwrap();
            assert_eq!(card.rank(), rank);
            assert_eq!(card.suit(), Some(suit));
        }
    }
}

#[test]
fn joker_accepts_any_suit() {
    for suit in [None, Some(Suit::Clubs), Some(Suit::Diamonds)] {
        let joker = Card::new(0, suit).unwrap();
        assert!(joker.is_joker());
        assert_eq!(joker.suit(), None);
    }
    assert_eq!(Card::from_parts(0, "not a suit"), Ok(Card::joker()));
    assert_eq!(Card::from_parts(0, ""), Ok(Card::joker()));
}

#[test]
fn invalid_cards_are_rejected() {
    assert_eq!(
        Card::new(14, Some(Suit::Clubs)).unwrap_err(),
        CardError::InvalidRank
    );
    assert_eq!(
        Card::from_parts(-1, "clubs").unwrap_err(),
        CardError::InvalidRank
    );
    assert_eq!(
        Card::from_parts(14, "clubs").unwrap_err(),
        CardError::InvalidRank
    );
    assert_eq!(
        Card::from_parts(20, "stars").unwrap_err(),
        CardError::InvalidRank
    );
    assert_eq!(Card::new(5, None).unwrap_err(), CardError::InvalidSuit);
    assert_eq!(
        Card::from_parts(5, "stars").unwrap_err(),
        CardError::InvalidSuit
    );
}

#[test]
fn suit_names_parse_case_insensitively() {
    assert_eq!("clubs".parse::<Suit>(), Ok(Suit::Clubs));
    assert_eq!("Hearts".parse::<Suit>(), Ok(Suit::Hearts));
    assert_eq!(" SPADES ".parse::<Suit>(), Ok(Suit::Spades));
    assert_eq!(
        Card::from_parts(12, "diamonds"),
        Ok(card(12, Suit::Diamonds))
    );
}

#[test]
fn card_descriptions() {
    assert_eq!(card(1, Suit::Clubs).to_string(), "A♣");
    assert_eq!(card(10, Suit::Spades).to_string(), "10♠");
    assert_eq!(card(12, Suit::Hearts).to_string(), "Q♥");
    assert_eq!(card(11, Suit::Diamonds).to_string(), "J♦");
    assert_eq!(Card::joker().to_string(), "JOKER");

    assert_eq!(card(1, Suit::Spades).long_description(), "The Ace of Spades");
    assert_eq!(
        card(12, Suit::Hearts).long_description(),
        "The Queen of Hearts"
    );
    assert_eq!(Card::joker().long_description(), "The Joker");
}

#[test]
fn deck_sizes() {
    assert_eq!(Deck::new(0).len(), DECK_SIZE);
    assert_eq!(Deck::new(1).len(), DECK_SIZE + 1);
    assert_eq!(Deck::new(3).iter().filter(|c| c.is_joker()).count(), 3);

    let empty = Deck::empty();
    assert!(empty.is_empty());
    assert_eq!(empty.len(), 0);
    assert_eq!(empty.to_string(), "[]");
}

#[test]
fn fresh_deck_holds_each_card_once() {
    let deck = Deck::new(0);
    for suit in Suit::ALL {
        for rank in 1..=13 {
            let wanted = card(rank, suit);
            assert_eq!(deck.iter().filter(|&&c| c == wanted).count(), 1);
        }
    }
    assert!(deck.to_string().starts_with("[A♣, 2♣, 3♣"));
    assert!(deck.to_string().ends_with("Q♦, K♦]"));
}

#[test]
fn shuffle_reorders_the_same_cards() {
    let original = Deck::new(0);
    let mut shuffled = original.clone();
    shuffled.shuffle(&mut ChaCha8Rng::seed_from_u64(7));

    assert_ne!(original.to_string(), shuffled.to_string());
    assert_eq!(shuffled.len(), original.len());
    assert!(original.iter().all(|c| shuffled.iter().any(|d| d == c)));
}

#[test]
fn shuffle_spreads_the_front_card() {
    let mut fronts: Vec<Card> = Vec::new();
    for seed in 0..200 {
        let mut deck = Deck::new(0);
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        let front = deck.draw().unwrap();
        if !fronts.contains(&front) {
            fronts.push(front);
        }
    }
    assert!(fronts.len() > 30, "only {} distinct front cards", fronts.len());
}

#[test]
fn draw_takes_from_the_front() {
    let mut deck = Deck::from_cards(vec![card(5, Suit::Hearts), card(9, Suit::Clubs)]);
    assert_eq!(deck.to_string(), "[5♥, 9♣]");
    assert_eq!(deck.draw(), Ok(card(5, Suit::Hearts)));
    assert_eq!(deck.draw(), Ok(card(9, Suit::Clubs)));
    assert!(deck.is_empty());
}

#[test]
fn empty_deck_draw_always_errors() {
    let mut deck = Deck::empty();
    for _ in 0..3 {
        assert_eq!(deck.draw(), Err(DeckError::Empty));
    }
}

#[test]
fn hand_demotes_soft_ace() {
    let mut hand = Hand::new();
    assert_eq!(hand.total(), 0);
    assert_eq!(hand.add(card(1, Suit::Spades)), 11);
    assert!(hand.is_soft());
    assert_eq!(hand.add(card(11, Suit::Spades)), 21);
    assert!(hand.is_soft());
    assert_eq!(hand.add(card(13, Suit::Spades)), 21);
    assert!(!hand.is_soft());
    assert_eq!(hand.len(), 3);
}

#[test]
fn hand_second_ace_counts_one() {
    let mut hand = Hand::new();
    assert_eq!(hand.add(card(1, Suit::Spades)), 11);
    assert_eq!(hand.add(card(1, Suit::Hearts)), 12);
    assert!(hand.is_soft());
    assert_eq!(hand.add(card(13, Suit::Clubs)), 12);
    assert!(!hand.is_soft());
    assert_eq!(hand.add(card(9, Suit::Clubs)), 21);
}

#[test]
fn hand_tracks_only_one_soft_ace() {
    let mut hand = Hand::new();
    hand.add(card(1, Suit::Spades));
    hand.add(card(5, Suit::Spades));
    assert_eq!(hand.add(card(6, Suit::Spades)), 12);
    assert!(!hand.is_soft());
    // Total is above 10 so the next ace is hard.
    assert_eq!(hand.add(card(1, Suit::Hearts)), 13);
    assert_eq!(hand.add(card(10, Suit::Hearts)), 23);
    assert!(hand.is_bust());
}

#[test]
fn hand_scores_faces_and_jokers() {
    let mut hand = Hand::new();
    assert_eq!(hand.add(card(12, Suit::Clubs)), 10);
    assert_eq!(hand.add(Card::joker()), 10);
    assert_eq!(hand.add(card(7, Suit::Clubs)), 17);
    assert!(!hand.is_soft());
}

#[test]
fn hand_display() {
    let mut hand = Hand::new();
    assert_eq!(hand.to_string(), "[  ] - Total: 0");
    hand.add(card(1, Suit::Clubs));
    hand.add(card(10, Suit::Spades));
    assert_eq!(hand.to_string(), "[ A♣, 10♠ ] - Total: 21");
}

#[test]
fn draw_two_moves_cards_into_hand() {
    let mut deck = Deck::new(0);
    let mut player = HumanPlayer::new(100);
    let drawn = player.draw_two(&mut deck).unwrap();

    assert_eq!(deck.len(), 50);
    assert_eq!(player.hand().len(), 2);
    assert_eq!(player.hand().cards(), drawn.as_slice());
}

#[test]
fn draw_two_from_short_deck_errors() {
    let mut deck = Deck::from_cards(vec![card(2, Suit::Clubs)]);
    let mut player = HumanPlayer::new(100);
    assert_eq!(player.draw_two(&mut deck).unwrap_err(), DeckError::Empty);
}

#[test]
fn place_bet_deducts_or_rejects() {
    let mut player = HumanPlayer::new(100);
    assert_eq!(player.place_bet(40), Ok(40));
    assert_eq!(player.balance(), 60);

    assert_eq!(player.place_bet(61), Err(BetError::InsufficientFunds));
    assert_eq!(player.balance(), 60);

    assert_eq!(player.place_bet(60), Ok(60));
    assert_eq!(player.balance(), 0);
}

#[test]
fn clear_hand_keeps_balance() {
    let mut deck = Deck::new(0);
    let mut player = HumanPlayer::new(30);
    player.hit(&mut deck).unwrap();
    player.clear_hand();

    assert!(player.hand().is_empty());
    assert_eq!(player.hand().total(), 0);
    assert_eq!(player.balance(), 30);
}

#[test]
fn dealer_hits_and_displays() {
    let mut deck = Deck::from_cards(vec![card(9, Suit::Hearts), card(1, Suit::Clubs)]);
    let mut dealer = Dealer::new();
    dealer.hit(&mut deck).unwrap();
    assert_eq!(dealer.to_string(), "Dealer Hand: [ 9♥ ] - Total: 9");

    dealer.hit(&mut deck).unwrap();
    assert_eq!(dealer.hand().total(), 20);
    assert_eq!(dealer.hit(&mut deck), Err(DeckError::Empty));

    dealer.clear_hand();
    assert!(dealer.hand().is_empty());
}
