// SPDX-License-Identifier: PMPL-1.0-or-later

//! International Olympic Committee country codes.
//!
//! Keyed by ISO alpha-2. Territories without an NOC are simply absent; see
//! [`crate::checks::missing_ioc_codes`].

pub const IOC_CODES: &[(&str, &str)] = &[
    ("AF", "AFG"),
    ("AL", "ALB"),
    ("DZ", "ALG"),
    ("AS", "ASA"),
    ("AD", "AND"),
    ("AO", "ANG"),
    ("AG", "ANT"),
    ("AR", "ARG"),
    ("AM", "ARM"),
    ("AW", "ARU"),
    ("AU", "AUS"),
    ("AT", "AUT"),
    ("AZ", "AZE"),
    ("BS", "BAH"),
    ("BH", "BRN"),
    ("BD", "BAN"),
    ("BB", "BAR"),
    ("BY", "BLR"),
    ("BE", "BEL"),
    ("BZ", "BIZ"),
    ("BJ", "BEN"),
    ("BM", "BER"),
    ("BT", "BHU"),
    ("BO", "BOL"),
    ("BA", "BIH"),
    ("BW", "BOT"),
    ("BR", "BRA"),
    ("VG", "IVB"),
    ("BN", "BRU"),
    ("BG", "BUL"),
    ("BF", "BUR"),
    ("BI", "BDI"),
    ("KH", "CAM"),
    ("CM", "CMR"),
    ("CA", "CAN"),
    ("CV", "CPV"),
    ("KY", "CAY"),
    ("CF", "CAF"),
    ("TD", "CHA"),
    ("CL", "CHI"),
    ("CN", "CHN"),
    ("CO", "COL"),
    ("KM", "COM"),
    ("CG", "CGO"),
    ("CD", "COD"),
    ("CK", "COK"),
    ("CR", "CRC"),
    ("CI", "CIV"),
    ("HR", "CRO"),
    ("CU", "CUB"),
    ("CY", "CYP"),
    ("CZ", "CZE"),
    ("DK", "DEN"),
    ("DJ", "DJI"),
    ("DM", "DMA"),
    ("DO", "DOM"),
    ("EC", "ECU"),
    ("EG", "EGY"),
    ("SV", "ESA"),
    ("GQ", "GEQ"),
    ("ER", "ERI"),
    ("EE", "EST"),
    ("ET", "ETH"),
    ("FJ", "FIJ"),
    ("FI", "FIN"),
    ("FR", "FRA"),
    ("GA", "GAB"),
    ("GM", "GAM"),
    ("GE", "GEO"),
    ("DE", "GER"),
    ("GH", "GHA"),
    ("GR", "GRE"),
    ("GD", "GRN"),
    ("GU", "GUM"),
    ("GT", "GUA"),
    ("GN", "GUI"),
    ("GW", "GBS"),
    ("GY", "GUY"),
    ("HT", "HAI"),
    ("HN", "HON"),
    ("HK", "HKG"),
    ("HU", "HUN"),
    ("IS", "ISL"),
    ("IN", "IND"),
    ("ID", "INA"),
    ("IR", "IRI"),
    ("IQ", "IRQ"),
    ("IE", "IRL"),
    ("IL", "ISR"),
    ("IT", "ITA"),
    ("JM", "JAM"),
    ("JP", "JPN"),
    ("JO", "JOR"),
    ("KZ", "KAZ"),
    ("KE", "KEN"),
    ("KI", "KIR"),
    ("KP", "PRK"),
    ("KR", "KOR"),
    ("KW", "KUW"),
    ("KG", "KGZ"),
    ("LA", "LAO"),
    ("LV", "LAT"),
    ("LB", "LIB"),
    ("LS", "LES"),
    ("LR", "LBR"),
    ("LY", "LBA"),
    ("LI", "LIE"),
    ("LT", "LTU"),
    ("LU", "LUX"),
    ("MK", "MKD"),
    ("MG", "MAD"),
    ("MW", "MAW"),
    ("MY", "MAS"),
    ("MV", "MDV"),
    ("ML", "MLI"),
    ("MT", "MLT"),
    ("MH", "MHL"),
    ("MR", "MTN"),
    ("MU", "MRI"),
    ("MX", "MEX"),
    ("FM", "FSM"),
    ("MD", "MDA"),
    ("MC", "MON"),
    ("MN", "MGL"),
    ("ME", "MNE"),
    ("MA", "MAR"),
    ("MZ", "MOZ"),
    ("MM", "MYA"),
    ("NA", "NAM"),
    ("NR", "NRU"),
    ("NP", "NEP"),
    ("NL", "NED"),
    ("NZ", "NZL"),
    ("NI", "NCA"),
    ("NE", "NIG"),
    ("NG", "NGR"),
    ("NO", "NOR"),
    ("OM", "OMA"),
    ("PK", "PAK"),
    ("PW", "PLW"),
    ("PS", "PLE"),
    ("PA", "PAN"),
    ("PG", "PNG"),
    ("PY", "PAR"),
    ("PE", "PER"),
    ("PH", "PHI"),
    ("PL", "POL"),
    ("PT", "POR"),
    ("PR", "PUR"),
    ("QA", "QAT"),
    ("RO", "ROU"),
    ("RU", "RUS"),
    ("RW", "RWA"),
    ("KN", "SKN"),
    ("LC", "LCA"),
    ("VC", "VIN"),
    ("WS", "SAM"),
    ("SM", "SMR"),
    ("ST", "STP"),
    ("SA", "KSA"),
    ("SN", "SEN"),
    ("RS", "SRB"),
    ("SC", "SEY"),
    ("SL", "SLE"),
    ("SG", "SIN"),
    ("SK", "SVK"),
    ("SI", "SLO"),
    ("SB", "SOL"),
    ("SO", "SOM"),
    ("ZA", "RSA"),
    ("SS", "SSD"),
    ("ES", "ESP"),
    ("LK", "SRI"),
    ("SD", "SUD"),
    ("SR", "SUR"),
    ("SZ", "SWZ"),
    ("SE", "SWE"),
    ("CH", "SUI"),
    ("SY", "SYR"),
    ("TW", "TPE"),
    ("TJ", "TJK"),
    ("TZ", "TAN"),
    ("TH", "THA"),
    ("TL", "TLS"),
    ("TG", "TOG"),
    ("TO", "TGA"),
    ("TT", "TTO"),
    ("TN", "TUN"),
    ("TR", "TUR"),
    ("TM", "TKM"),
    ("TV", "TUV"),
    ("UG", "UGA"),
    ("UA", "UKR"),
    ("AE", "UAE"),
    ("GB", "GBR"),
    ("US", "USA"),
    ("UY", "URU"),
    ("UZ", "UZB"),
    ("VU", "VAN"),
    ("VE", "VEN"),
    ("VN", "VIE"),
    ("VI", "ISV"),
    ("YE", "YEM"),
    ("ZM", "ZAM"),
    ("ZW", "ZIM"),
];

/// IOC code for an alpha-2 code, or `""` if the territory has none.
pub fn ioc_code(alpha2: &str) -> &'static str {
    IOC_CODES
        .iter()
        .find(|(code, _)| *code == alpha2)
        .map(|&(_, ioc)| ioc)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_that_differ_from_alpha3() {
        assert_eq!(ioc_code("DE"), "GER");
        assert_eq!(ioc_code("NL"), "NED");
        assert_eq!(ioc_code("CH"), "SUI");
        assert_eq!(ioc_code("TW"), "TPE");
    }

    #[test]
    fn territories_without_noc() {
        assert_eq!(ioc_code("AQ"), "");
        assert_eq!(ioc_code("GL"), "");
    }
}
