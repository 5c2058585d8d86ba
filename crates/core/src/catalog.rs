//! The static product catalog.
//!
//! The shop sells a fixed assortment of equine cuts, cured specialties and
//! ready-cooked dishes; the assortment changes a few times a year at most, so
//! the catalog ships with the binary instead of living on the content
//! platform. Prices are per unit in EUR, weights in kilograms.

use std::sync::LazyLock;

use rust_decimal::Decimal;

use crate::types::product::{Product, ProductCategory};

static CATALOG: LazyLock<Vec<Product>> = LazyLock::new(build_catalog);

/// All products, in display order.
#[must_use]
pub fn all() -> &'static [Product] {
    &CATALOG
}

/// Look up a product by id.
#[must_use]
pub fn find(id: &str) -> Option<&'static Product> {
    CATALOG.iter().find(|p| p.id == id)
}

/// All products in a category, preserving display order.
#[must_use]
pub fn by_category(category: ProductCategory) -> Vec<&'static Product> {
    CATALOG.iter().filter(|p| p.category == category).collect()
}

/// Decimal literal helper: `d(234, 1)` is 23.4.
fn d(mantissa: i64, scale: u32) -> Decimal {
    Decimal::new(mantissa, scale)
}

#[allow(clippy::too_many_lines)]
fn build_catalog() -> Vec<Product> {
    let entry = |id: &str,
                 name: &str,
                 list_price: Decimal,
                 offer_price: Decimal,
                 weight_kg: Decimal,
                 category: ProductCategory,
                 image_id: &str,
                 description: &str| Product {
        id: id.to_owned(),
        name: name.to_owned(),
        list_price,
        offer_price,
        weight_kg,
        category,
        image_id: image_id.to_owned(),
        description: description.to_owned(),
    };

    let kg = Decimal::ONE;
    // Cured meats sell by the 100 g slice.
    let etto = d(1, 1);

    vec![
        entry(
            "braciole-cotte",
            "Braciole Cotte al Sugo",
            d(18, 0),
            d(18, 0),
            kg,
            ProductCategory::Specialties,
            "braciole-cotte",
            "Braciole già stufate a lungo nel nostro sugo, pronte da portare in tavola.",
        ),
        entry(
            "pezzetti-cotti",
            "Pezzetti Cotti al Sugo",
            d(16, 0),
            d(16, 0),
            kg,
            ProductCategory::Specialties,
            "pezzetti-cotti",
            "I pezzetti di cavallo della tradizione, già cotti e tenerissimi.",
        ),
        entry(
            "trippa-cotta",
            "Trippa Cotta al Sugo",
            d(13, 0),
            d(13, 0),
            kg,
            ProductCategory::Specialties,
            "trippa-cotta",
            "Trippa saporita cotta secondo la ricetta di casa, pronta da scaldare.",
        ),
        entry(
            "carne-asino-cotta",
            "Carne di asino cotta",
            d(234, 1),
            d(21, 0),
            kg,
            ProductCategory::Donkey,
            "asino-cotta",
            "Stufato di asino a cottura lenta, dal gusto ricco e avvolgente.",
        ),
        entry(
            "salame-asino",
            "Salame di asino della casa",
            d(283, 1),
            d(27, 0),
            kg,
            ProductCategory::Donkey,
            "salame-asino",
            "Il salame della casa, insaccato secondo la nostra ricetta.",
        ),
        entry(
            "bresaola-asino",
            "Bresaola di asino della casa",
            d(56, 1),
            d(44, 1),
            etto,
            ProductCategory::Donkey,
            "bresaola-asino",
            "Bresaola magra e leggera, venduta all'etto, ideale per carpacci.",
        ),
        entry(
            "costate-asino-osso",
            "Costate di asino con osso",
            d(212, 1),
            d(19, 0),
            kg,
            ProductCategory::Donkey,
            "costate-asino-osso",
            "Costate con osso per la griglia, sapore intenso e grande tenerezza.",
        ),
        entry(
            "costate-asino-senza-osso",
            "Costate di asino senza osso",
            d(243, 1),
            d(23, 0),
            kg,
            ProductCategory::Donkey,
            "costate-asino-senza-osso",
            "Bistecca succulenta senza osso, perfetta in padella o alla brace.",
        ),
        entry(
            "hamburger-asino",
            "Hamburger di asino",
            d(135, 1),
            d(12, 0),
            kg,
            ProductCategory::Donkey,
            "hamburger-asino",
            "Burger magro e nutriente dal sapore deciso.",
        ),
        entry(
            "rosticciana-asino",
            "Rosticciana Di Asino",
            d(224, 1),
            d(19, 0),
            kg,
            ProductCategory::Donkey,
            "rosticciana-asino",
            "Costine marinate pronte per la brace.",
        ),
        entry(
            "straccetti-asino-marinati",
            "Straccetti di Asino marinati",
            d(195, 1),
            d(17, 0),
            kg,
            ProductCategory::Donkey,
            "straccetti-asino-marinati",
            "Straccetti sottili già marinati, da saltare in padella in pochi minuti.",
        ),
        entry(
            "tagliata-asino-marinata",
            "Tagliata di asino marinata",
            d(235, 1),
            d(21, 0),
            kg,
            ProductCategory::Donkey,
            "tagliata-asino-marinata",
            "Taglio nobile con la nostra marinatura, pochi minuti in griglia.",
        ),
        entry(
            "salsiccia-asino",
            "Salsiccia di asino",
            d(115, 1),
            d(10, 0),
            kg,
            ProductCategory::Donkey,
            "salsiccia-asino",
            "Salsiccia dal carattere forte, speziatura equilibrata.",
        ),
        entry(
            "picanha-asino",
            "Picanha di asino",
            d(23, 0),
            d(20, 0),
            kg,
            ProductCategory::Donkey,
            "picanha-asino",
            "Il taglio dei maestri della griglia, con la sua copertina di grasso.",
        ),
        entry(
            "costolette-mulo-marinate",
            "Costolette di mulo marinate",
            d(225, 1),
            d(19, 0),
            kg,
            ProductCategory::Mule,
            "costolette-mulo",
            "Costolette di mulo marinate, rustiche e sorprendentemente tenere.",
        ),
        entry(
            "asado-mulo",
            "Asado di mulo",
            d(24, 0),
            d(21, 0),
            kg,
            ProductCategory::Mule,
            "asado-mulo",
            "Taglio tradizionale per cotture lente dal sapore robusto.",
        ),
        entry(
            "asado-asino",
            "Asado di asino",
            d(25, 0),
            d(23, 0),
            kg,
            ProductCategory::Donkey,
            "asado-asino",
            "L'asado nella versione più delicata, da cottura lenta.",
        ),
        entry(
            "fettine-asino",
            "Fettine di asino",
            d(212, 1),
            d(19, 0),
            kg,
            ProductCategory::Donkey,
            "fettine-asino",
            "Fettine sottili e versatili per scaloppine e involtini.",
        ),
        entry(
            "pezzetti-cavallo",
            "Pezzetti di cavallo",
            d(176, 1),
            d(14, 0),
            kg,
            ProductCategory::Horse,
            "pezzetti-cavallo",
            "Il cuore della tradizione salentina, perfetti per lo spezzatino al sugo.",
        ),
        entry(
            "fettine-mulo",
            "Fettine di mulo",
            d(241, 1),
            d(23, 0),
            kg,
            ProductCategory::Mule,
            "fettine-mulo",
            "Carne magra dal sapore caratteristico.",
        ),
        entry(
            "pezzetti-mulo",
            "Pezzetti di mulo",
            d(217, 1),
            d(19, 0),
            kg,
            ProductCategory::Mule,
            "pezzetti-mulo",
            "Per spezzatini e stufati dal gusto deciso.",
        ),
        entry(
            "fettine-cavallo-lattone",
            "Fettine di cavallo tuttofare",
            d(222, 1),
            d(195, 1),
            kg,
            ProductCategory::Horse,
            "fettine-lattone",
            "Fettine di puledro tenere e delicate, adatte a ogni ricetta.",
        ),
        entry(
            "polpa-equina",
            "Polpa Equina",
            d(21, 0),
            d(19, 0),
            kg,
            ProductCategory::Horse,
            "polpa-equina",
            "Tagli scelti di polpa di puledro per arrosti, spezzatini e ragù.",
        ),
        entry(
            "asado-asino-con-osso",
            "Asado di asino (con osso)",
            d(21, 0),
            d(18, 0),
            kg,
            ProductCategory::Donkey,
            "asado-asino-osso",
            "Il taglio intercostale con osso, per la cottura vicino all'osso.",
        ),
        entry(
            "pezzetti-asino",
            "Pezzetti di Asino",
            d(182, 1),
            d(16, 0),
            kg,
            ProductCategory::Donkey,
            "pezzetti-asino",
            "Bocconcini teneri dal gusto più dolce rispetto al cavallo.",
        ),
        entry(
            "tritato-equino",
            "Tritato Equino",
            d(179, 1),
            d(14, 0),
            kg,
            ProductCategory::Horse,
            "tritato-equino",
            "Macinato fresco di prima scelta, magro, per ragù e polpette.",
        ),
        entry(
            "salsiccia-della-casa",
            "Salsiccia della casa",
            d(109, 1),
            d(85, 1),
            kg,
            ProductCategory::SucklingPig,
            "salsiccia-lattone",
            "La salsiccia classica di lattone, delicata, per tutta la famiglia.",
        ),
        entry(
            "trippa-pulita",
            "Trippa Pulita",
            d(112, 1),
            d(9, 0),
            kg,
            ProductCategory::Horse,
            "trippa-pulita",
            "Trippa già pulita, pronta da cucinare.",
        ),
        entry(
            "ribeye-asino",
            "Ribeye di Asino",
            d(278, 1),
            d(26, 0),
            kg,
            ProductCategory::Donkey,
            "ribeye-asino",
            "Taglio marezzato di eccezionale tenerezza.",
        ),
        entry(
            "asado-mulo-marinato",
            "Asado di Mulo Marinato",
            d(25, 0),
            d(23, 0),
            kg,
            ProductCategory::Mule,
            "asado-mulo-marinato",
            "L'asado di mulo con la nostra marinatura, pronto per la griglia.",
        ),
        entry(
            "tomahawk-asino-con-osso",
            "Tomahawk Di Asino Con Osso",
            d(231, 1),
            d(22, 0),
            kg,
            ProductCategory::Donkey,
            "tomahawk-asino",
            "La bistecca scenografica che non passa inosservata.",
        ),
        entry(
            "tagliata-di-asino",
            "Tagliata di Asino",
            d(232, 1),
            d(195, 1),
            kg,
            ProductCategory::Donkey,
            "tagliata-asino",
            "Un classico per la cena: tenera, magra, da servire con rucola e grana.",
        ),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_not_empty() {
        assert_eq!(all().len(), 32);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<&str> = all().iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all().len());
    }

    #[test]
    fn test_find_known_product() {
        let product = find("bresaola-asino").unwrap();
        assert_eq!(product.weight_kg, d(1, 1));
        assert!(product.is_on_offer());
    }

    #[test]
    fn test_find_unknown_product() {
        assert!(find("fiorentina-di-manzo").is_none());
    }

    #[test]
    fn test_offer_price_never_exceeds_list_price() {
        for product in all() {
            assert!(
                product.offer_price <= product.list_price,
                "{} is dearer on offer",
                product.id
            );
        }
    }

    #[test]
    fn test_by_category_partitions_catalog() {
        let total: usize = [
            ProductCategory::Donkey,
            ProductCategory::Mule,
            ProductCategory::Horse,
            ProductCategory::SucklingPig,
            ProductCategory::Specialties,
        ]
        .into_iter()
        .map(|c| by_category(c).len())
        .sum();
        assert_eq!(total, all().len());
    }
}
