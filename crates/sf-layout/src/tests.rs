//! Unit tests for sf-layout.

#[cfg(test)]
mod codec_tests {
    use crate::{Cell, Product, Target};

    #[test]
    fn every_product_code_round_trips() {
        for p in Product::ALL {
            assert_eq!(Product::from_code(p.code()), Some(p), "{p}");
            assert_eq!(Cell::from_code(p.code()), Cell::Shelf(p));
        }
    }

    #[test]
    fn product_codes_are_unique() {
        let mut codes: Vec<char> = Product::ALL.iter().map(|p| p.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), Product::ALL.len());
    }

    #[test]
    fn structural_codes() {
        assert_eq!(Cell::from_code('#'), Cell::Wall);
        assert_eq!(Cell::from_code('.'), Cell::Floor);
        assert_eq!(Cell::from_code('E'), Cell::Entrance);
        assert_eq!(Cell::from_code('X'), Cell::Checkout);
    }

    #[test]
    fn only_shelves_stock_a_product() {
        assert_eq!(Cell::Shelf(Product::Meat).product(), Some(Product::Meat));
        assert_eq!(Cell::Floor.product(), None);
        assert_eq!(Cell::Checkout.product(), None);
        assert_eq!(Cell::Entrance.product(), None);
    }

    #[test]
    fn unknown_codes_are_floor() {
        assert_eq!(Cell::from_code('?'), Cell::Floor);
        assert_eq!(Cell::from_code(' '), Cell::Floor);
        assert_eq!(Cell::from_code('é'), Cell::Floor);
    }

    #[test]
    fn walkability() {
        assert!(Cell::Floor.is_walkable());
        assert!(Cell::Entrance.is_walkable());
        assert!(Cell::Checkout.is_walkable());
        assert!(!Cell::Wall.is_walkable());
        assert!(!Cell::Shelf(Product::Meat).is_walkable());
    }

    #[test]
    fn names() {
        assert_eq!(Product::OilCondiments.to_string(), "Oil/Condiments");
        assert_eq!(Target::Checkout.to_string(), "Checkout");
        assert_eq!(Target::from(Product::PetFood).to_string(), "Pet Food");
    }

    #[test]
    fn center_store_is_subset_of_all() {
        for p in Product::CENTER_STORE {
            assert!(Product::ALL.contains(&p));
        }
        assert!(!Product::CENTER_STORE.contains(&Product::Meat));
    }
}

#[cfg(test)]
mod plan_tests {
    use crate::FloorPlan;

    #[test]
    fn pads_short_rows_and_missing_rows() {
        let plan = FloorPlan::sanitize(&["##", "#"], 3, 4);
        assert_eq!(plan.rows(), ["##.", "#..", "...", "..."]);
        assert_eq!((plan.width(), plan.height()), (3, 4));
    }

    #[test]
    fn truncates_long_rows_and_extra_rows() {
        let plan = FloorPlan::sanitize(&["#####", "#E..#", "#...#", "#####"], 3, 2);
        assert_eq!(plan.rows(), ["###", "#E."]);
    }

    #[test]
    fn well_formed_plan_is_unchanged() {
        let rows = ["#####", "#E.X#", "#####"];
        assert!(FloorPlan::is_well_formed(&rows, 5, 3));
        let plan = FloorPlan::sanitize(&rows, 5, 3);
        assert_eq!(plan.rows(), rows);
        assert_eq!(FloorPlan::sanitize(plan.rows(), 5, 3), plan);
    }

    #[test]
    fn width_counts_chars_not_bytes() {
        let plan = FloorPlan::sanitize(&["éé"], 3, 1);
        assert_eq!(plan.rows()[0].chars().count(), 3);
    }

    #[test]
    fn from_rows_uses_first_row_width() {
        let plan = FloorPlan::from_rows(&["####", "#E", "#.X#.."]);
        assert_eq!((plan.width(), plan.height()), (4, 3));
        assert_eq!(plan.rows(), ["####", "#E..", "#.X#"]);
    }

    #[test]
    fn empty_input_pads_to_floor() {
        let rows: [&str; 0] = [];
        let plan = FloorPlan::sanitize(&rows, 2, 2);
        assert_eq!(plan.to_text(), "..\n..");
    }
}

#[cfg(test)]
mod grid_tests {
    use sf_core::Pos;

    use crate::{Cell, FloorPlan, GridIndex, Product, Target};

    fn small() -> GridIndex {
        // Text row 0 is the top; it becomes y = 3.
        let plan = FloorPlan::sanitize(&["#####", "#MXM#", "#E..#", "#####"], 5, 4);
        GridIndex::build(&plan)
    }

    #[test]
    fn rows_are_inverted() {
        let g = small();
        assert_eq!(g.cell(Pos::new(1, 1)), Some(Cell::Entrance));
        assert_eq!(g.cell(Pos::new(2, 2)), Some(Cell::Checkout));
        assert_eq!(g.cell(Pos::new(1, 2)), Some(Cell::Shelf(Product::Meat)));
        assert_eq!(g.text_row(1), 2);
        assert_eq!(g.text_row(3), 0);
    }

    #[test]
    #[should_panic]
    fn text_row_rejects_rows_past_the_top() {
        small().text_row(4);
    }

    #[test]
    fn entrances_indexed() {
        assert_eq!(small().entrances(), [Pos::new(1, 1)]);
    }

    #[test]
    fn locations_in_scan_order() {
        let g = small();
        assert_eq!(
            g.locations(Target::Product(Product::Meat)),
            [Pos::new(1, 2), Pos::new(3, 2)]
        );
        assert_eq!(g.locations(Target::Checkout), [Pos::new(2, 2)]);
        assert!(g.locations(Target::Product(Product::Baby)).is_empty());
        assert_eq!(g.target_count(), 2);
    }

    #[test]
    fn bounds_and_walkability() {
        let g = small();
        assert!(g.is_walkable(Pos::new(2, 1)));
        assert!(g.is_walkable(Pos::new(2, 2)));
        assert!(!g.is_walkable(Pos::new(0, 0)));
        assert!(!g.is_walkable(Pos::new(1, 2)));
        assert!(!g.is_walkable(Pos::new(-1, 1)));
        assert!(!g.is_walkable(Pos::new(5, 1)));
        assert_eq!(g.cell(Pos::new(9, 9)), None);
    }

    #[test]
    fn floor_cells_exclude_special_walkables() {
        let floors: Vec<Pos> = small().floor_cells().collect();
        assert_eq!(floors, [Pos::new(2, 1), Pos::new(3, 1)]);
    }

    #[test]
    fn to_plan_restores_text() {
        let rows = ["#####", "#MXM#", "#E..#", "#####"];
        let g = GridIndex::build(&FloorPlan::sanitize(&rows, 5, 4));
        assert_eq!(g.to_plan().rows(), rows);
    }

    #[test]
    fn build_is_deterministic() {
        let plan = crate::reference_layout(48, 48);
        let a = GridIndex::build(&plan);
        let b = GridIndex::build(&plan);
        assert_eq!(a.entrances(), b.entrances());
        for p in Product::ALL {
            assert_eq!(a.locations(p.into()), b.locations(p.into()));
        }
    }
}

#[cfg(test)]
mod generator_tests {
    use sf_core::Pos;

    use crate::{Cell, FloorPlan, GridIndex, Product, Target, reference_layout};

    #[test]
    fn reference_layout_has_requested_shape() {
        let plan = reference_layout(48, 48);
        assert!(FloorPlan::is_well_formed(plan.rows(), 48, 48));
    }

    #[test]
    fn sanitizing_generated_plan_is_identity() {
        let plan = reference_layout(48, 48);
        assert_eq!(FloorPlan::sanitize(plan.rows(), 48, 48), plan);
    }

    #[test]
    fn reference_layout_features() {
        let plan = reference_layout(48, 48);
        let rows = plan.rows();
        assert!(rows[0].chars().all(|c| c == '#'));
        assert!(rows[47].chars().all(|c| c == '#'));
        assert_eq!(rows[1].chars().nth(24), Some('E'));
        assert_eq!(rows[4].chars().nth(5), Some('X'));
        assert_eq!(rows[46].chars().nth(2), Some('M'));
        assert_eq!(rows[10].chars().nth(2), Some('Z'));
        // First aisle stripe: (y + x) % 14 at text (8, 8) → index 2 → Soda.
        assert_eq!(rows[8].chars().nth(8), Some('s'));
        assert_eq!(rows[8].chars().nth(9), Some('s'));
        // Cross aisle at mid height.
        assert_eq!(rows[24].chars().nth(8), Some('.'));
        assert_eq!(rows[23].chars().nth(8), Some('.'));
    }

    #[test]
    fn reference_grid_has_one_entrance_and_checkout() {
        let g = GridIndex::build(&reference_layout(48, 48));
        assert_eq!(g.entrances(), [Pos::new(24, 46)]);
        assert_eq!(g.locations(Target::Checkout), [Pos::new(5, 43)]);
        assert!(!g.locations(Product::Meat.into()).is_empty());
        assert_eq!(g.cell(Pos::new(0, 0)), Some(Cell::Wall));
    }

    #[test]
    fn tiny_dimensions_do_not_panic() {
        for (w, h) in [(0, 0), (1, 1), (2, 3), (6, 5)] {
            let plan = reference_layout(w, h);
            assert!(FloorPlan::is_well_formed(plan.rows(), w, h), "{w}x{h}");
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::FloorPlan;

    #[test]
    fn deserialized_plans_are_repaired() {
        let json = r####"{"rows": ["#E", "#.X..", "###"], "width": 3, "height": 4}"####;
        let plan: FloorPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.rows(), ["#E.", "#.X", "###", "..."]);
        assert_eq!((plan.width(), plan.height()), (3, 4));
    }

    #[test]
    fn serialized_plans_load_unchanged() {
        let plan = FloorPlan::sanitize(&["#E#", "#X#"], 3, 2);
        let json = serde_json::to_string(&plan).unwrap();
        assert_eq!(serde_json::from_str::<FloorPlan>(&json).unwrap(), plan);
    }
}
