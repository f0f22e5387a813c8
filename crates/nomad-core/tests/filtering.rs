use nomad_core::prelude::*;
use proptest::prelude::*;
use std::collections::HashSet;

fn city(name: &str, province: &str, overall: f64, speed: f64, cost: &str) -> City {
    City {
        id: name.to_lowercase(),
        name: name.to_string(),
        province: province.to_string(),
        emoji: String::new(),
        overall_score: overall,
        cost_per_month: cost.to_string(),
        internet_speed: speed,
        nomads_count: 0,
        cafe_rating: 0.0,
        work_score: 0.0,
        quality_score: 0.0,
        reviews_count: 0,
        likes_count: None,
        dislikes_count: None,
        description: None,
        image_url: None,
    }
}

fn names(cities: &[City]) -> Vec<&str> {
    cities.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn speed_threshold_excludes_slow_city() {
    let cities = vec![
        city("Seoul", "Seoul", 9.0, 100.0, "80-120M"),
        city("Busan", "Busan", 7.0, 50.0, "50M"),
    ];
    let params = FilterParams {
        search: String::new(),
        regions: Default::default(),
        cost_range: CostRange::new(1, 5),
        min_speed: 60,
        sort_by: SortKey::Overall,
    };

    let out = apply_filters(&cities, &params);
    assert_eq!(names(&out), ["Seoul"]);
}

#[test]
fn region_codes_match_literal_province() {
    let cities = vec![
        city("Seoul", "Seoul", 9.0, 100.0, "80-120M"),
        city("Busan", "Busan", 7.0, 50.0, "50M"),
    ];
    let params = FilterParams::new().with_regions(["Busan"]);
    assert_eq!(names(&apply_filters(&cities, &params)), ["Busan"]);
}

#[test]
fn bundled_dataset_filters_by_region_and_cost() {
    let catalog = CityCatalog::load().unwrap();

    let gyeongsang = FilterParams::new().with_regions(["gyeongsan"]);
    let out = apply_filters(catalog.cities(), &gyeongsang);
    assert_eq!(names(&out), ["부산", "대구"]);

    let cheap = query::decode_str("costMin=1&costMax=2&sort=cheap");
    let out = apply_filters(catalog.cities(), &cheap);
    let ids: Vec<&str> = out.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["gwangju", "daejeon", "gangneung", "jeonju", "daegu", "jeju"]);
}

#[test]
fn search_matches_name_by_default() {
    let catalog = CityCatalog::load().unwrap();

    let out = apply_filters(catalog.cities(), &FilterParams::new().with_search(" 강릉 "));
    assert_eq!(names(&out), ["강릉"]);

    let out = apply_filters(catalog.cities(), &FilterParams::new().with_search("강원"));
    assert!(out.is_empty());

    let out = apply_filters(catalog.cities(), &FilterParams::new().with_search("seoul"));
    assert!(out.is_empty());
}

#[test]
fn province_search_is_opt_in() {
    let catalog = CityCatalog::load().unwrap();
    let config = FilterConfig::new().with_search_fields(nomad_core::SearchFields {
        province: true,
        description: false,
    });
    let params = FilterParams::new().with_search("강원");
    assert_eq!(names(&apply_filters_with(catalog.cities(), &params, &config)), ["강릉"]);
}

#[test]
fn description_search_is_opt_in() {
    let catalog = CityCatalog::load().unwrap();
    let params = FilterParams::new().with_search("한옥");
    assert!(apply_filters(catalog.cities(), &params).is_empty());

    let config = FilterConfig::new().with_search_fields(nomad_core::SearchFields {
        province: true,
        description: true,
    });
    let out = apply_filters_with(catalog.cities(), &params, &config);
    assert_eq!(names(&out), ["전주"]);
}

#[test]
fn favorites_restrict_the_listing() {
    let catalog = CityCatalog::load().unwrap();
    let mut store = MemoryStore::new();
    {
        let mut favorites = IdList::favorites(&mut store);
        favorites.add("jeju").unwrap();
        favorites.add("daegu").unwrap();
    }
    let favorites: HashSet<String> = IdListKind::Favorites.read(&store).unwrap().into_iter().collect();

    let params = FilterParams::default();
    let out = CityFilter::new(&params).restrict_to(&favorites).apply(catalog.cities());
    assert_eq!(names(&out), ["제주", "대구"]);
}

#[test]
fn url_driven_round_trip_through_filter_state() {
    let catalog = CityCatalog::load().unwrap();
    let mut state = FilterState::new(MemoryNavigator::with_query("?lang=ko"));

    state.update_filters(&FilterUpdate::new().regions(["seoul", "jeju"]).min_speed(900));
    let out = apply_filters(catalog.cities(), &state.filters());
    assert_eq!(names(&out), ["서울"]);

    state.update_filters(&FilterUpdate::new().min_speed(0));
    let out = apply_filters(catalog.cities(), &state.filters());
    assert_eq!(names(&out), ["서울", "제주"]);

    let params = state.reset_filters();
    assert_eq!(params, FilterParams::default());
    assert_eq!(state.navigator().query().to_query(), "lang=ko");
}

fn arb_city() -> impl Strategy<Value = City> {
    (
        0u32..1000,
        prop::sample::select(vec!["서울특별시", "강원도", "부산광역시", "제주특별자치도", "Tokyo"]),
        0.0f64..10.0,
        0.0f64..1000.0,
        prop::sample::select(vec!["1.2~1.8M", "1.8~2.5M", "2.2M", "2.8~3M", "3.5~4M", "n/a"]),
    )
        .prop_map(|(n, province, overall, speed, cost)| {
            city(&format!("city{n}"), province, overall, speed, cost)
        })
}

fn arb_regions() -> impl Strategy<Value = Vec<&'static str>> {
    prop::sample::subsequence(vec!["seoul", "gangwon", "gyeongsan", "jeju", "Tokyo"], 0..=5)
}

proptest! {
    #[test]
    fn stricter_params_select_a_subset(
        cities in prop::collection::vec(arb_city(), 0..40),
        regions in arb_regions(),
        extra_region_drop in 0usize..5,
        min in 1u8..=5,
        span in 0u8..5,
        shrink in 0u8..3,
        speed in 0u32..800,
        speed_bump in 0u32..300,
    ) {
        let max = (min + span).min(5);
        let loose = FilterParams::new()
            .with_regions(regions.iter().copied())
            .with_cost_range(min, max)
            .with_min_speed(speed);

        let mut narrower: Vec<&str> = regions.clone();
        if narrower.len() > 1 {
            narrower.remove(extra_region_drop % narrower.len());
        }
        let strict_max = max.saturating_sub(shrink).max(min);
        let strict = FilterParams::new()
            .with_regions(narrower)
            .with_cost_range(min, strict_max)
            .with_min_speed(speed + speed_bump);

        let loose_ids: HashSet<String> =
            apply_filters(&cities, &loose).into_iter().map(|c| c.id).collect();
        for c in apply_filters(&cities, &strict) {
            prop_assert!(loose_ids.contains(&c.id));
        }
    }

    #[test]
    fn sort_is_stable_for_equal_keys(cities in prop::collection::vec(arb_city(), 0..40)) {
        let flattened: Vec<City> = cities
            .into_iter()
            .enumerate()
            .map(|(i, mut c)| {
                c.id = format!("{i:03}");
                c.overall_score = (c.overall_score / 3.0).floor();
                c
            })
            .collect();
        let out = apply_filters(&flattened, &FilterParams::default());
        for pair in out.windows(2) {
            if pair[0].overall_score == pair[1].overall_score {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }
}
