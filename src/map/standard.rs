//! The standard 75-territory map.
//!
//! Territories are declared in alphabetical order by abbreviation;
//! adjacency and coastline data follow. Symmetry of the neighbour and
//! shared-coast relations is asserted when the map is built.

use super::{Coast, Map, MapBuilder, Nation, Terrain};

pub(super) fn build() -> Map {
    use Nation::*;
    use Terrain::*;

    let mut b = MapBuilder::new();

    b.territory("adr", "Adriatic Sea", Sea);
    b.territory("aeg", "Aegean Sea", Sea);
    b.territory("alb", "Albania", Coastal);
    b.center("ank", "Ankara", Coastal, true, Some(Turkey));
    b.territory("apu", "Apulia", Coastal);
    b.territory("arm", "Armenia", Coastal);
    b.territory("bal", "Baltic Sea", Sea);
    b.territory("bar", "Barents Sea", Sea);
    b.center("bel", "Belgium", Coastal, true, None);
    b.center("ber", "Berlin", Coastal, true, Some(Germany));
    b.territory("bla", "Black Sea", Sea);
    b.territory("boh", "Bohemia", Inland);
    b.territory("bot", "Gulf of Bothnia", Sea);
    b.center("bre", "Brest", Coastal, true, Some(France));
    b.center("bud", "Budapest", Inland, true, Some(Austria));
    b.center("bul", "Bulgaria", Coastal, true, None);
    b.territory("bur", "Burgundy", Inland);
    b.territory("cly", "Clyde", Coastal);
    b.center("con", "Constantinople", Coastal, true, Some(Turkey));
    b.center("den", "Denmark", Coastal, true, None);
    b.territory("eas", "Eastern Mediterranean", Sea);
    b.center("edi", "Edinburgh", Coastal, true, Some(England));
    b.territory("eng", "English Channel", Sea);
    b.territory("fin", "Finland", Coastal);
    b.territory("gal", "Galicia", Inland);
    b.territory("gas", "Gascony", Coastal);
    b.territory("gol", "Gulf of Lyon", Sea);
    b.center("gre", "Greece", Coastal, true, None);
    b.territory("hel", "Heligoland Bight", Sea);
    b.center("hol", "Holland", Coastal, true, None);
    b.territory("ion", "Ionian Sea", Sea);
    b.territory("iri", "Irish Sea", Sea);
    b.center("kie", "Kiel", Coastal, true, Some(Germany));
    b.center("lon", "London", Coastal, true, Some(England));
    b.territory("lvn", "Livonia", Coastal);
    b.center("lvp", "Liverpool", Coastal, true, Some(England));
    b.territory("mao", "Mid-Atlantic Ocean", Sea);
    b.center("mar", "Marseilles", Coastal, true, Some(France));
    b.center("mos", "Moscow", Inland, true, Some(Russia));
    b.center("mun", "Munich", Inland, true, Some(Germany));
    b.territory("naf", "North Africa", Coastal);
    b.territory("nao", "North Atlantic Ocean", Sea);
    b.center("nap", "Naples", Coastal, true, Some(Italy));
    b.territory("nrg", "Norwegian Sea", Sea);
    b.territory("nth", "North Sea", Sea);
    b.center("nwy", "Norway", Coastal, true, None);
    b.center("par", "Paris", Inland, true, Some(France));
    b.territory("pic", "Picardy", Coastal);
    b.territory("pie", "Piedmont", Coastal);
    b.center("por", "Portugal", Coastal, true, None);
    b.territory("pru", "Prussia", Coastal);
    b.center("rom", "Rome", Coastal, true, Some(Italy));
    b.territory("ruh", "Ruhr", Inland);
    b.center("rum", "Rumania", Coastal, true, None);
    b.center("ser", "Serbia", Inland, true, None);
    b.center("sev", "Sevastopol", Coastal, true, Some(Russia));
    b.territory("sil", "Silesia", Inland);
    b.territory("ska", "Skagerrak", Sea);
    b.center("smy", "Smyrna", Coastal, true, Some(Turkey));
    b.center("spa", "Spain", Coastal, true, None);
    b.center("stp", "St. Petersburg", Coastal, true, Some(Russia));
    b.center("swe", "Sweden", Coastal, true, None);
    b.territory("syr", "Syria", Coastal);
    b.center("tri", "Trieste", Coastal, true, Some(Austria));
    b.center("tun", "Tunisia", Coastal, true, None);
    b.territory("tus", "Tuscany", Coastal);
    b.territory("tyr", "Tyrolia", Inland);
    b.territory("tys", "Tyrrhenian Sea", Sea);
    b.territory("ukr", "Ukraine", Inland);
    b.center("ven", "Venice", Coastal, true, Some(Italy));
    b.center("vie", "Vienna", Inland, true, Some(Austria));
    b.territory("wal", "Wales", Coastal);
    b.center("war", "Warsaw", Inland, true, Some(Russia));
    b.territory("wes", "Western Mediterranean", Sea);
    b.territory("yor", "Yorkshire", Coastal);

    b.neighbours("adr", &["alb", "apu", "ion", "tri", "ven"]);
    b.neighbours("aeg", &["bul", "con", "eas", "gre", "ion", "smy"]);
    b.neighbours("alb", &["adr", "gre", "ion", "ser", "tri"]);
    b.neighbours("ank", &["arm", "bla", "con", "smy"]);
    b.neighbours("apu", &["adr", "ion", "nap", "rom", "ven"]);
    b.neighbours("arm", &["ank", "bla", "sev", "smy", "syr"]);
    b.neighbours("bal", &["ber", "bot", "den", "kie", "lvn", "pru", "swe"]);
    b.neighbours("bar", &["nrg", "nwy", "stp"]);
    b.neighbours("bel", &["bur", "eng", "hol", "nth", "pic", "ruh"]);
    b.neighbours("ber", &["bal", "kie", "mun", "pru", "sil"]);
    b.neighbours("bla", &["ank", "arm", "bul", "con", "rum", "sev"]);
    b.neighbours("boh", &["gal", "mun", "sil", "tyr", "vie"]);
    b.neighbours("bot", &["bal", "fin", "lvn", "stp", "swe"]);
    b.neighbours("bre", &["eng", "gas", "mao", "par", "pic"]);
    b.neighbours("bud", &["gal", "rum", "ser", "tri", "vie"]);
    b.neighbours("bul", &["aeg", "bla", "con", "gre", "rum", "ser"]);
    b.neighbours("bur", &["bel", "gas", "mar", "mun", "par", "pic", "ruh"]);
    b.neighbours("cly", &["edi", "lvp", "nao", "nrg"]);
    b.neighbours("con", &["aeg", "ank", "bla", "bul", "smy"]);
    b.neighbours("den", &["bal", "hel", "kie", "nth", "ska", "swe"]);
    b.neighbours("eas", &["aeg", "ion", "smy", "syr"]);
    b.neighbours("edi", &["cly", "lvp", "nrg", "nth", "yor"]);
    b.neighbours("eng", &["bel", "bre", "iri", "lon", "mao", "nth", "pic", "wal"]);
    b.neighbours("fin", &["bot", "nwy", "stp", "swe"]);
    b.neighbours("gal", &["boh", "bud", "rum", "sil", "ukr", "vie", "war"]);
    b.neighbours("gas", &["bre", "bur", "mao", "mar", "par", "spa"]);
    b.neighbours("gol", &["mar", "pie", "spa", "tus", "tys", "wes"]);
    b.neighbours("gre", &["aeg", "alb", "bul", "ion", "ser"]);
    b.neighbours("hel", &["den", "hol", "kie", "nth"]);
    b.neighbours("hol", &["bel", "hel", "nth", "ruh"]);
    b.neighbours("ion", &["adr", "aeg", "alb", "apu", "eas", "gre", "nap", "tun", "tys"]);
    b.neighbours("iri", &["eng", "lvp", "mao", "nao", "wal"]);
    b.neighbours("kie", &["bal", "ber", "den", "hel", "mun", "ruh"]);
    b.neighbours("lon", &["eng", "nth", "wal", "yor"]);
    b.neighbours("lvn", &["bal", "bot", "mos", "pru", "stp", "war"]);
    b.neighbours("lvp", &["cly", "edi", "iri", "nao", "wal", "yor"]);
    b.neighbours("mao", &["bre", "eng", "gas", "iri", "naf", "nao", "por", "spa", "wes"]);
    b.neighbours("mar", &["bur", "gas", "gol", "pie", "spa"]);
    b.neighbours("mos", &["lvn", "sev", "stp", "ukr", "war"]);
    b.neighbours("mun", &["ber", "boh", "bur", "kie", "ruh", "sil", "tyr"]);
    b.neighbours("naf", &["mao", "tun", "wes"]);
    b.neighbours("nao", &["cly", "iri", "lvp", "mao", "nrg"]);
    b.neighbours("nap", &["apu", "ion", "rom", "tys"]);
    b.neighbours("nrg", &["bar", "cly", "edi", "nao", "nth", "nwy"]);
    b.neighbours("nth", &["bel", "den", "edi", "eng", "hel", "hol", "lon", "nrg", "nwy", "ska", "yor"]);
    b.neighbours("nwy", &["bar", "fin", "nrg", "nth", "ska", "stp", "swe"]);
    b.neighbours("par", &["bre", "bur", "gas", "pic"]);
    b.neighbours("pic", &["bel", "bre", "bur", "eng", "par"]);
    b.neighbours("pie", &["gol", "mar", "tus", "tyr", "ven"]);
    b.neighbours("por", &["mao", "spa"]);
    b.neighbours("pru", &["bal", "ber", "lvn", "sil", "war"]);
    b.neighbours("rom", &["apu", "nap", "tus", "tys", "ven"]);
    b.neighbours("ruh", &["bel", "bur", "hol", "kie", "mun"]);
    b.neighbours("rum", &["bla", "bud", "bul", "gal", "ser", "sev", "ukr"]);
    b.neighbours("ser", &["alb", "bud", "bul", "gre", "rum", "tri"]);
    b.neighbours("sev", &["arm", "bla", "mos", "rum", "ukr"]);
    b.neighbours("sil", &["ber", "boh", "gal", "mun", "pru", "war"]);
    b.neighbours("ska", &["den", "nth", "nwy", "swe"]);
    b.neighbours("smy", &["aeg", "ank", "arm", "con", "eas", "syr"]);
    b.neighbours("spa", &["gas", "gol", "mao", "mar", "por", "wes"]);
    b.neighbours("stp", &["bar", "bot", "fin", "lvn", "mos", "nwy"]);
    b.neighbours("swe", &["bal", "bot", "den", "fin", "nwy", "ska"]);
    b.neighbours("syr", &["arm", "eas", "smy"]);
    b.neighbours("tri", &["adr", "alb", "bud", "ser", "tyr", "ven", "vie"]);
    b.neighbours("tun", &["ion", "naf", "tys", "wes"]);
    b.neighbours("tus", &["gol", "pie", "rom", "tys", "ven"]);
    b.neighbours("tyr", &["boh", "mun", "pie", "tri", "ven", "vie"]);
    b.neighbours("tys", &["gol", "ion", "nap", "rom", "tun", "tus", "wes"]);
    b.neighbours("ukr", &["gal", "mos", "rum", "sev", "war"]);
    b.neighbours("ven", &["adr", "apu", "pie", "rom", "tri", "tus", "tyr"]);
    b.neighbours("vie", &["boh", "bud", "gal", "tri", "tyr"]);
    b.neighbours("wal", &["eng", "iri", "lon", "lvp", "yor"]);
    b.neighbours("war", &["gal", "lvn", "mos", "pru", "sil", "ukr"]);
    b.neighbours("wes", &["gol", "mao", "naf", "spa", "tun", "tys"]);
    b.neighbours("yor", &["edi", "lon", "lvp", "nth", "wal"]);

    b.shared_coasts("alb", &["gre", "tri"]);
    b.shared_coasts("ank", &["arm", "con"]);
    b.shared_coasts("apu", &["nap", "ven"]);
    b.shared_coasts("arm", &["ank", "sev"]);
    b.shared_coasts("bel", &["hol", "pic"]);
    b.shared_coasts("ber", &["kie", "pru"]);
    b.shared_coasts("bre", &["gas", "pic"]);
    b.shared_coasts("cly", &["edi", "lvp"]);
    b.shared_coasts("con", &["ank", "smy"]);
    b.shared_coasts("den", &["kie", "swe"]);
    b.shared_coasts("edi", &["cly", "yor"]);
    b.shared_coasts("fin", &["swe"]);
    b.shared_coasts("gas", &["bre"]);
    b.shared_coasts("gre", &["alb"]);
    b.shared_coasts("hol", &["bel"]);
    b.shared_coasts("kie", &["ber", "den"]);
    b.shared_coasts("lon", &["wal", "yor"]);
    b.shared_coasts("lvn", &["pru"]);
    b.shared_coasts("lvp", &["cly", "wal"]);
    b.shared_coasts("mar", &["pie"]);
    b.shared_coasts("naf", &["tun"]);
    b.shared_coasts("nap", &["apu", "rom"]);
    b.shared_coasts("nwy", &["swe"]);
    b.shared_coasts("pic", &["bel", "bre"]);
    b.shared_coasts("pie", &["mar", "tus"]);
    b.shared_coasts("pru", &["ber", "lvn"]);
    b.shared_coasts("rom", &["nap", "tus"]);
    b.shared_coasts("rum", &["sev"]);
    b.shared_coasts("sev", &["arm", "rum"]);
    b.shared_coasts("smy", &["con", "syr"]);
    b.shared_coasts("swe", &["den", "fin", "nwy"]);
    b.shared_coasts("syr", &["smy"]);
    b.shared_coasts("tri", &["alb", "ven"]);
    b.shared_coasts("tun", &["naf"]);
    b.shared_coasts("tus", &["pie", "rom"]);
    b.shared_coasts("ven", &["apu", "tri"]);
    b.shared_coasts("wal", &["lon", "lvp"]);
    b.shared_coasts("yor", &["edi", "lon"]);

    b.named_coast("bul", Coast::East, &["bla", "con", "rum"]);
    b.named_coast("bul", Coast::South, &["aeg", "con", "gre"]);
    b.named_coast("spa", Coast::North, &["gas", "mao", "por"]);
    b.named_coast("spa", Coast::South, &["gol", "mao", "mar", "por", "wes"]);
    b.named_coast("stp", Coast::North, &["bar", "nwy"]);
    b.named_coast("stp", Coast::South, &["bot", "fin", "lvn"]);

    b.build()
}
