//! Cell classification and the floor-plan alphabet.
//!
//! Every character of a floor plan decodes to exactly one [`Cell`].  The
//! character codes live only in this module; the rest of the workspace works
//! with the enums.

use std::fmt;

// ── Product ───────────────────────────────────────────────────────────────────

/// A shelf product category.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Product {
    // Perimeter
    Meat,
    Dairy,
    Produce,
    Bakery,
    Frozen,
    // Center store
    Cereal,
    Juice,
    Soda,
    Pasta,
    Sauce,
    Chips,
    Cookies,
    OilCondiments,
    Water,
    Household,
    PetFood,
    Baby,
    TeaCoffee,
    CannedVeg,
}

impl Product {
    /// Every category, perimeter first.
    pub const ALL: [Product; 19] = [
        Product::Meat,
        Product::Dairy,
        Product::Produce,
        Product::Bakery,
        Product::Frozen,
        Product::Cereal,
        Product::Juice,
        Product::Soda,
        Product::Pasta,
        Product::Sauce,
        Product::Chips,
        Product::Cookies,
        Product::OilCondiments,
        Product::Water,
        Product::Household,
        Product::PetFood,
        Product::Baby,
        Product::TeaCoffee,
        Product::CannedVeg,
    ];

    /// The center-store aisle categories, in aisle striping order.
    ///
    /// Both the reference layout generator and the variety picks of shopping
    /// list generation index into this table.
    pub const CENTER_STORE: [Product; 14] = [
        Product::Cereal,
        Product::Juice,
        Product::Soda,
        Product::Pasta,
        Product::Sauce,
        Product::Chips,
        Product::Cookies,
        Product::OilCondiments,
        Product::Water,
        Product::Household,
        Product::PetFood,
        Product::Baby,
        Product::TeaCoffee,
        Product::CannedVeg,
    ];

    /// One-character floor-plan code.
    pub fn code(self) -> char {
        match self {
            Product::Meat          => 'M',
            Product::Dairy         => 'D',
            Product::Produce       => 'P',
            Product::Bakery        => 'B',
            Product::Frozen        => 'Z',
            Product::Cereal        => 'c',
            Product::Juice         => 'j',
            Product::Soda          => 's',
            Product::Pasta         => 'p',
            Product::Sauce         => 'S',
            Product::Chips         => 'C',
            Product::Cookies       => 'k',
            Product::OilCondiments => 'o',
            Product::Water         => 'w',
            Product::Household     => 'h',
            Product::PetFood       => 'F',
            Product::Baby          => 'b',
            Product::TeaCoffee     => 't',
            Product::CannedVeg     => 'V',
        }
    }

    /// Inverse of [`code`](Self::code).  `None` for non-product characters.
    pub fn from_code(code: char) -> Option<Product> {
        Product::ALL.into_iter().find(|p| p.code() == code)
    }

    /// Human-readable label, as shown in legends and reports.
    pub fn name(self) -> &'static str {
        match self {
            Product::Meat          => "Meat",
            Product::Dairy         => "Dairy",
            Product::Produce       => "Produce",
            Product::Bakery        => "Bakery",
            Product::Frozen        => "Frozen",
            Product::Cereal        => "Cereal",
            Product::Juice         => "Juice",
            Product::Soda          => "Soda",
            Product::Pasta         => "Pasta",
            Product::Sauce         => "Sauce",
            Product::Chips         => "Chips",
            Product::Cookies       => "Cookies",
            Product::OilCondiments => "Oil/Condiments",
            Product::Water         => "Water",
            Product::Household     => "Household",
            Product::PetFood       => "Pet Food",
            Product::Baby          => "Baby",
            Product::TeaCoffee     => "Tea/Coffee",
            Product::CannedVeg     => "Canned Veg",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Cell ──────────────────────────────────────────────────────────────────────

/// Structural classification of one grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Impassable structure.
    Wall,
    /// Walkable, empty.
    #[default]
    Floor,
    /// Walkable; shoppers spawn here.
    Entrance,
    /// Walkable; the terminal destination of every shopping trip.
    Checkout,
    /// Impassable shelf, interactable from any adjacent walkable cell.
    Shelf(Product),
}

impl Cell {
    pub const WALL: char = '#';
    pub const FLOOR: char = '.';
    pub const ENTRANCE: char = 'E';
    pub const CHECKOUT: char = 'X';

    /// Decode one floor-plan character.  Unrecognized codes are `Floor`.
    pub fn from_code(code: char) -> Cell {
        match code {
            Cell::WALL     => Cell::Wall,
            Cell::FLOOR    => Cell::Floor,
            Cell::ENTRANCE => Cell::Entrance,
            Cell::CHECKOUT => Cell::Checkout,
            other => Product::from_code(other).map_or(Cell::Floor, Cell::Shelf),
        }
    }

    pub fn code(self) -> char {
        match self {
            Cell::Wall       => Cell::WALL,
            Cell::Floor      => Cell::FLOOR,
            Cell::Entrance   => Cell::ENTRANCE,
            Cell::Checkout   => Cell::CHECKOUT,
            Cell::Shelf(p)   => p.code(),
        }
    }

    /// Shoppers may stand on Floor, Entrance and Checkout cells only.
    #[inline]
    pub fn is_walkable(self) -> bool {
        matches!(self, Cell::Floor | Cell::Entrance | Cell::Checkout)
    }

    #[inline]
    pub fn product(self) -> Option<Product> {
        match self {
            Cell::Shelf(p) => Some(p),
            _ => None,
        }
    }

    /// The location-index key this cell is filed under, if any.
    pub fn target(self) -> Option<Target> {
        match self {
            Cell::Checkout => Some(Target::Checkout),
            Cell::Shelf(p) => Some(Target::Product(p)),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Cell::Wall     => "Wall",
            Cell::Floor    => "Floor",
            Cell::Entrance => "Entrance",
            Cell::Checkout => "Checkout",
            Cell::Shelf(p) => p.name(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Target ────────────────────────────────────────────────────────────────────

/// Something a shopper can walk towards: a product shelf or the checkout.
///
/// Checkout shares the location index with products so the same
/// nearest-instance search serves both.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    Product(Product),
    Checkout,
}

impl From<Product> for Target {
    fn from(p: Product) -> Self {
        Target::Product(p)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Product(p) => f.write_str(p.name()),
            Target::Checkout   => f.write_str("Checkout"),
        }
    }
}
