//! Weighted shopping-list generation.

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use sf_layout::Product;

/// Independent inclusion probability for each essential item.
///
/// One Bernoulli trial per row; a list can contain any subset of these.
pub const ESSENTIAL_ODDS: [(Product, f64); 13] = [
    (Product::Meat,      0.8),
    (Product::Dairy,     0.8),
    (Product::Produce,   0.8),
    (Product::Bakery,    0.6),
    (Product::Frozen,    0.5),
    (Product::Cereal,    0.4),
    (Product::Soda,      0.4),
    (Product::Chips,     0.4),
    (Product::Pasta,     0.3),
    (Product::Household, 0.1),
    (Product::Juice,     0.3),
    (Product::Water,     0.2),
    (Product::Baby,      0.1),
];

/// Extra center-store items appended to every list, drawn with replacement.
///
/// Guarantees a non-empty list and pulls shoppers into the aisles even when
/// every essential trial fails.
pub const VARIETY_PICKS: usize = 3;

/// Draw a fresh shopping list.
///
/// Essentials first (one trial each, in table order), then
/// [`VARIETY_PICKS`] uniform picks from [`Product::CENTER_STORE`], then a
/// uniform shuffle of the whole list.  The head of the returned queue is the
/// shopper's first target.
pub fn generate_shopping_list<R: Rng + ?Sized>(rng: &mut R) -> VecDeque<Product> {
    let mut items: Vec<Product> = ESSENTIAL_ODDS
        .iter()
        .filter(|&&(_, odds)| rng.gen_bool(odds))
        .map(|&(product, _)| product)
        .collect();

    for _ in 0..VARIETY_PICKS {
        if let Some(&pick) = Product::CENTER_STORE.choose(rng) {
            items.push(pick);
        }
    }

    items.shuffle(rng);
    items.into()
}
