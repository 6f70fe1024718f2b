//! Shared fixtures for unit tests.

use crate::catalog::Catalog;
use crate::models::{Category, Part};

/// A small catalog covering every category and attribute rule.
pub(crate) fn sample_catalog() -> Catalog {
    let parts = [
        ("bodytype_hell_eckig", Category::Bodytype, "bodytype/Hell_Eckig.png"),
        ("bodytype_braun_eckig", Category::Bodytype, "bodytype/Braun_Eckig.png"),
        ("bodytype_hell_breit", Category::Bodytype, "bodytype/Hell_Breit.png"),
        ("bodytype_braun_breit", Category::Bodytype, "bodytype/Braun_Breit.png"),
        ("bodytype_dunkel_rund", Category::Bodytype, "bodytype/Dunkel_Rund.png"),
        ("head_hell_oval", Category::Head, "head/Hell_Oval.png"),
        ("head_hell_eckig", Category::Head, "head/Hell_Eckig.png"),
        ("head_braun_eckig", Category::Head, "head/Braun_Eckig.png"),
        ("head_dunkel_oval", Category::Head, "head/Dunkel_Oval.png"),
        ("hair_black_kraus", Category::Hair, "hair/black_kraus.png"),
        ("hair_blonde_kraus", Category::Hair, "hair/blonde_kraus.png"),
        ("hair_black_bob", Category::Hair, "hair/black_bob.png"),
        ("hair_red_bob", Category::Hair, "hair/red_bob.png"),
        ("hair_cap", Category::Hair, "hair/cap.png"),
        ("shoes_boots", Category::Shoes, "shoes/boots.png"),
        ("shoes_sneaker", Category::Shoes, "shoes/sneaker.png"),
        ("brust_option", Category::Brust, "brust/option.png"),
        ("values_mut", Category::Values, "values/mut.png"),
        ("strengths_team", Category::Strengths, "strengths/team.png"),
        ("face_glasses", Category::Face, "face/glasses.png"),
        ("face_freckles", Category::Face, "face/freckles.png"),
        ("clothes_shirt_breit", Category::Clothes, "clothes/Shirt_Breit.png"),
        ("clothes_shirt_normal", Category::Clothes, "clothes/Shirt_Normal.png"),
        ("clothes_scarf", Category::Clothes, "clothes/Scarf.png"),
        ("accessoires_bag_breit", Category::Accessoires, "accessoires/bag_breit.png"),
        ("accessoires_watch", Category::Accessoires, "accessoires/watch.png"),
        ("handicap_wheelchair", Category::Handicap, "handicap/wheelchair.png"),
    ];
    Catalog::from_parts(parts.into_iter().map(|(id, category, src)| Part::new(id, category, src)))
}

/// Look up a fixture part, panicking on typos in test code.
pub(crate) fn part<'a>(catalog: &'a Catalog, id: &str) -> &'a Part {
    catalog.part(id).unwrap_or_else(|| panic!("fixture part '{}' missing", id))
}
