//! Registro de fichas técnicas
//!
//! Cada modelo del catálogo tiene un identificador `CarModel` y una ficha
//! `CarSpecs` estática. La búsqueda desde texto libre (marca + modelo)
//! normaliza mayúsculas y espacios; si no hay entrada se devuelve
//! `SpecLookup::Unlisted` con los valores recibidos, nunca un nulo silencioso.

use serde::Serialize;
use std::collections::BTreeMap;

/// Modelos con ficha técnica en el catálogo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CarModel {
    Porsche911TurboS,
    PorscheCayenneTurboGt,
    PorscheTaycanTurboS,
    FerrariF8Tributo,
    FerrariRomaSpider,
    Ferrari296Gtb,
    LamborghiniHuracanEvo,
    LamborghiniUrusPerformante,
    LamborghiniRevuelto,
    AstonMartinDb12,
    AstonMartinVantageV12,
    McLaren750s,
    McLarenArtura,
    BentleyContinentalGtSpeed,
    BentleyFlyingSpur,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineSpecs {
    pub kind: &'static str,
    pub displacement: &'static str,
    pub horsepower: &'static str,
    pub torque: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceSpecs {
    pub top_speed: &'static str,
    pub acceleration_0_60: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransmissionSpecs {
    pub kind: &'static str,
    pub gears: u8,
}

/// Ficha técnica de un modelo
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarSpecs {
    pub make: &'static str,
    pub model: &'static str,
    pub body_type: &'static str,
    pub drivetrain: &'static str,
    pub seating_capacity: u8,
    pub doors: u8,
    pub generation: &'static str,
    pub country_of_origin: &'static str,
    pub engine: EngineSpecs,
    pub performance: PerformanceSpecs,
    pub transmission: TransmissionSpecs,
    pub curb_weight: &'static str,
    pub fuel_type: &'static str,
    pub description: &'static str,
}

/// Resultado de buscar una ficha por marca y modelo
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpecLookup {
    Catalogued { id: CarModel, specs: CarSpecs },
    Unlisted { make: String, model: String },
}

impl SpecLookup {
    pub fn specs(&self) -> Option<&CarSpecs> {
        match self {
            SpecLookup::Catalogued { specs, .. } => Some(specs),
            SpecLookup::Unlisted { .. } => None,
        }
    }
}

fn normalize(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

impl CarModel {
    pub const ALL: [CarModel; 15] = [
        CarModel::Porsche911TurboS,
        CarModel::PorscheCayenneTurboGt,
        CarModel::PorscheTaycanTurboS,
        CarModel::FerrariF8Tributo,
        CarModel::FerrariRomaSpider,
        CarModel::Ferrari296Gtb,
        CarModel::LamborghiniHuracanEvo,
        CarModel::LamborghiniUrusPerformante,
        CarModel::LamborghiniRevuelto,
        CarModel::AstonMartinDb12,
        CarModel::AstonMartinVantageV12,
        CarModel::McLaren750s,
        CarModel::McLarenArtura,
        CarModel::BentleyContinentalGtSpeed,
        CarModel::BentleyFlyingSpur,
    ];

    /// Busca el identificador a partir de texto libre
    pub fn from_make_model(make: &str, model: &str) -> Option<CarModel> {
        let make = normalize(make);
        let model = normalize(model);
        CarModel::ALL.into_iter().find(|id| {
            let specs = id.specs();
            normalize(specs.make) == make && normalize(specs.model) == model
        })
    }

    pub fn specs(&self) -> CarSpecs {
        match self {
            CarModel::Porsche911TurboS => CarSpecs {
                make: "Porsche",
                model: "911 Turbo S",
                body_type: "Coupe",
                drivetrain: "AWD",
                seating_capacity: 4,
                doors: 2,
                generation: "992.2",
                country_of_origin: "Germany",
                engine: EngineSpecs {
                    kind: "Twin-Turbocharged Flat-6",
                    displacement: "3.7L (3,745 cc)",
                    horsepower: "640 hp @ 6,750 rpm",
                    torque: "590 lb-ft @ 2,500-4,000 rpm",
                },
                performance: PerformanceSpecs {
                    top_speed: "205 mph",
                    acceleration_0_60: "2.6 seconds",
                },
                transmission: TransmissionSpecs { kind: "PDK Dual-Clutch", gears: 8 },
                curb_weight: "3,636 lbs",
                fuel_type: "Premium Unleaded",
                description: "The pinnacle of the 911 lineup: a twin-turbocharged flat-six sending 640 hp to all four wheels through the PDK transmission.",
            },
            CarModel::PorscheCayenneTurboGt => CarSpecs {
                make: "Porsche",
                model: "Cayenne Turbo GT",
                body_type: "SUV",
                drivetrain: "AWD",
                seating_capacity: 4,
                doors: 5,
                generation: "E3 (3rd Gen)",
                country_of_origin: "Germany",
                engine: EngineSpecs {
                    kind: "Twin-Turbocharged V8",
                    displacement: "4.0L (3,996 cc)",
                    horsepower: "659 hp @ 6,000 rpm",
                    torque: "627 lb-ft @ 2,000-4,500 rpm",
                },
                performance: PerformanceSpecs {
                    top_speed: "186 mph",
                    acceleration_0_60: "3.1 seconds",
                },
                transmission: TransmissionSpecs { kind: "Tiptronic S Automatic", gears: 8 },
                curb_weight: "5,038 lbs",
                fuel_type: "Premium Unleaded",
                description: "Porsche's most track-focused SUV, pairing a 659 hp twin-turbo V8 with a four-seat cabin.",
            },
            CarModel::PorscheTaycanTurboS => CarSpecs {
                make: "Porsche",
                model: "Taycan Turbo S",
                body_type: "Sedan",
                drivetrain: "AWD",
                seating_capacity: 4,
                doors: 4,
                generation: "Taycan (J1 Mk2)",
                country_of_origin: "Germany",
                engine: EngineSpecs {
                    kind: "Dual Permanent Magnet Synchronous Electric Motors",
                    displacement: "93.4 kWh Battery Pack",
                    horsepower: "939 hp (overboost w/ Launch Control)",
                    torque: "849 lb-ft instantaneous",
                },
                performance: PerformanceSpecs {
                    top_speed: "162 mph",
                    acceleration_0_60: "2.3 seconds",
                },
                transmission: TransmissionSpecs { kind: "2-Speed Rear / 1-Speed Front", gears: 2 },
                curb_weight: "5,079 lbs",
                fuel_type: "Electric",
                description: "An all-electric four-door with 939 hp on overboost and an 800-volt architecture.",
            },
            CarModel::FerrariF8Tributo => CarSpecs {
                make: "Ferrari",
                model: "F8 Tributo",
                body_type: "Coupe",
                drivetrain: "RWD",
                seating_capacity: 2,
                doors: 2,
                generation: "F8 (F142MFL)",
                country_of_origin: "Italy",
                engine: EngineSpecs {
                    kind: "Twin-Turbocharged V8",
                    displacement: "3.9L (3,902 cc)",
                    horsepower: "710 hp @ 8,000 rpm",
                    torque: "568 lb-ft @ 3,250 rpm",
                },
                performance: PerformanceSpecs {
                    top_speed: "211 mph",
                    acceleration_0_60: "2.9 seconds",
                },
                transmission: TransmissionSpecs { kind: "F1 DCT Dual-Clutch", gears: 7 },
                curb_weight: "3,164 lbs",
                fuel_type: "Premium Unleaded",
                description: "Ferrari's tribute to its most powerful V8, a 710 hp mid-engine berlinetta.",
            },
            CarModel::FerrariRomaSpider => CarSpecs {
                make: "Ferrari",
                model: "Roma Spider",
                body_type: "Convertible",
                drivetrain: "RWD",
                seating_capacity: 2,
                doors: 2,
                generation: "Roma (F169)",
                country_of_origin: "Italy",
                engine: EngineSpecs {
                    kind: "Twin-Turbocharged V8",
                    displacement: "3.9L (3,855 cc)",
                    horsepower: "612 hp @ 7,500 rpm",
                    torque: "561 lb-ft @ 3,000 rpm",
                },
                performance: PerformanceSpecs {
                    top_speed: "199 mph",
                    acceleration_0_60: "3.2 seconds",
                },
                transmission: TransmissionSpecs { kind: "F1 DCT Dual-Clutch", gears: 8 },
                curb_weight: "3,616 lbs",
                fuel_type: "Premium Unleaded",
                description: "A soft-top grand tourer with a front-mid-mounted 612 hp V8.",
            },
            CarModel::Ferrari296Gtb => CarSpecs {
                make: "Ferrari",
                model: "296 GTB",
                body_type: "Coupe",
                drivetrain: "RWD",
                seating_capacity: 2,
                doors: 2,
                generation: "296 GTB (F171)",
                country_of_origin: "Italy",
                engine: EngineSpecs {
                    kind: "Twin-Turbo V6 + E-Motor PHEV",
                    displacement: "3.0L (2,992 cc) V6 + 167 hp E-Motor",
                    horsepower: "819 hp combined (654 ICE + 167 Electric)",
                    torque: "546 lb-ft combined",
                },
                performance: PerformanceSpecs {
                    top_speed: "205 mph",
                    acceleration_0_60: "2.9 seconds",
                },
                transmission: TransmissionSpecs { kind: "F1 8-Speed DCT", gears: 8 },
                curb_weight: "3,296 lbs",
                fuel_type: "Hybrid (Premium + Electric)",
                description: "A plug-in hybrid berlinetta combining a 120-degree V6 with an electric motor for 819 hp.",
            },
            CarModel::LamborghiniHuracanEvo => CarSpecs {
                make: "Lamborghini",
                model: "Huracán EVO",
                body_type: "Coupe",
                drivetrain: "AWD",
                seating_capacity: 2,
                doors: 2,
                generation: "Huracán EVO (LB724)",
                country_of_origin: "Italy",
                engine: EngineSpecs {
                    kind: "Naturally Aspirated V10",
                    displacement: "5.2L (5,204 cc)",
                    horsepower: "631 hp @ 8,000 rpm",
                    torque: "443 lb-ft @ 6,500 rpm",
                },
                performance: PerformanceSpecs {
                    top_speed: "202 mph",
                    acceleration_0_60: "2.9 seconds",
                },
                transmission: TransmissionSpecs { kind: "LDF 7-Speed DCT", gears: 7 },
                curb_weight: "3,135 lbs",
                fuel_type: "Premium Unleaded",
                description: "A naturally aspirated V10 supercar with predictive all-wheel drive and rear-wheel steering.",
            },
            CarModel::LamborghiniUrusPerformante => CarSpecs {
                make: "Lamborghini",
                model: "Urus Performante",
                body_type: "SUV",
                drivetrain: "AWD",
                seating_capacity: 5,
                doors: 5,
                generation: "Urus (Mk1 Facelift)",
                country_of_origin: "Italy",
                engine: EngineSpecs {
                    kind: "Twin-Turbocharged V8",
                    displacement: "4.0L (3,996 cc)",
                    horsepower: "666 hp @ 6,000 rpm",
                    torque: "627 lb-ft @ 2,300-4,500 rpm",
                },
                performance: PerformanceSpecs {
                    top_speed: "190 mph",
                    acceleration_0_60: "3.3 seconds",
                },
                transmission: TransmissionSpecs { kind: "ZF 8-Speed Automatic", gears: 8 },
                curb_weight: "4,850 lbs",
                fuel_type: "Premium Unleaded",
                description: "The lighter, sharper Urus with 666 hp and a lowered steel suspension.",
            },
            CarModel::LamborghiniRevuelto => CarSpecs {
                make: "Lamborghini",
                model: "Revuelto",
                body_type: "Coupe",
                drivetrain: "AWD",
                seating_capacity: 2,
                doors: 2,
                generation: "Revuelto (LB744)",
                country_of_origin: "Italy",
                engine: EngineSpecs {
                    kind: "V12 + Triple E-Motor PHEV",
                    displacement: "6.5L (6,498 cc) V12 + 3 Electric Motors",
                    horsepower: "1,001 hp combined (814 V12 + 187 Electric)",
                    torque: "535 lb-ft from V12 + instant electric torque",
                },
                performance: PerformanceSpecs {
                    top_speed: "217 mph",
                    acceleration_0_60: "2.5 seconds",
                },
                transmission: TransmissionSpecs { kind: "8-Speed DCT (New Design)", gears: 8 },
                curb_weight: "3,858 lbs",
                fuel_type: "Hybrid (Premium + Electric)",
                description: "Lamborghini's first V12 plug-in hybrid, producing 1,001 hp combined.",
            },
            CarModel::AstonMartinDb12 => CarSpecs {
                make: "Aston Martin",
                model: "DB12",
                body_type: "Grand Tourer",
                drivetrain: "RWD",
                seating_capacity: 4,
                doors: 2,
                generation: "DB12 (2024+)",
                country_of_origin: "United Kingdom",
                engine: EngineSpecs {
                    kind: "Twin-Turbocharged V8",
                    displacement: "4.0L (3,982 cc)",
                    horsepower: "671 hp @ 6,000 rpm",
                    torque: "590 lb-ft @ 2,750-6,000 rpm",
                },
                performance: PerformanceSpecs {
                    top_speed: "202 mph",
                    acceleration_0_60: "3.4 seconds",
                },
                transmission: TransmissionSpecs { kind: "ZF 8-Speed Automatic", gears: 8 },
                curb_weight: "3,946 lbs",
                fuel_type: "Premium Unleaded",
                description: "Aston Martin's 'super tourer', blending a 671 hp V8 with long-distance comfort.",
            },
            CarModel::AstonMartinVantageV12 => CarSpecs {
                make: "Aston Martin",
                model: "Vantage V12",
                body_type: "Coupe",
                drivetrain: "RWD",
                seating_capacity: 2,
                doors: 2,
                generation: "Vantage V12 (Final Edition)",
                country_of_origin: "United Kingdom",
                engine: EngineSpecs {
                    kind: "Twin-Turbocharged V12",
                    displacement: "5.2L (5,204 cc)",
                    horsepower: "690 hp @ 6,500 rpm",
                    torque: "555 lb-ft @ 1,800-6,000 rpm",
                },
                performance: PerformanceSpecs {
                    top_speed: "200 mph",
                    acceleration_0_60: "3.4 seconds",
                },
                transmission: TransmissionSpecs { kind: "ZF 8-Speed Automatic", gears: 8 },
                curb_weight: "3,946 lbs",
                fuel_type: "Premium Unleaded",
                description: "A limited-run send-off for the V12 Vantage with a 690 hp twin-turbo V12.",
            },
            CarModel::McLaren750s => CarSpecs {
                make: "McLaren",
                model: "750S",
                body_type: "Coupe",
                drivetrain: "RWD",
                seating_capacity: 2,
                doors: 2,
                generation: "750S (P15)",
                country_of_origin: "United Kingdom",
                engine: EngineSpecs {
                    kind: "Twin-Turbocharged V8",
                    displacement: "4.0L (3,994 cc)",
                    horsepower: "740 hp @ 7,500 rpm",
                    torque: "590 lb-ft @ 5,500 rpm",
                },
                performance: PerformanceSpecs {
                    top_speed: "206 mph",
                    acceleration_0_60: "2.7 seconds",
                },
                transmission: TransmissionSpecs { kind: "SSG 7-Speed DCT", gears: 7 },
                curb_weight: "2,963 lbs",
                fuel_type: "Premium Unleaded",
                description: "A carbon-tub supercar with 740 hp and one of the best power-to-weight ratios in its class.",
            },
            CarModel::McLarenArtura => CarSpecs {
                make: "McLaren",
                model: "Artura",
                body_type: "Coupe",
                drivetrain: "RWD",
                seating_capacity: 2,
                doors: 2,
                generation: "Artura (HPH V6 Hybrid)",
                country_of_origin: "United Kingdom",
                engine: EngineSpecs {
                    kind: "Twin-Turbo V6 + E-Motor Hybrid",
                    displacement: "3.0L (2,993 cc) + 94 hp E-Motor",
                    horsepower: "680 hp combined",
                    torque: "531 lb-ft combined",
                },
                performance: PerformanceSpecs {
                    top_speed: "205 mph",
                    acceleration_0_60: "2.9 seconds",
                },
                transmission: TransmissionSpecs { kind: "8-Speed SSG DCT", gears: 8 },
                curb_weight: "3,303 lbs",
                fuel_type: "Hybrid (Premium + Electric)",
                description: "McLaren's high-performance hybrid, pairing a compact V6 with an axial-flux e-motor.",
            },
            CarModel::BentleyContinentalGtSpeed => CarSpecs {
                make: "Bentley",
                model: "Continental GT Speed",
                body_type: "Grand Tourer",
                drivetrain: "AWD",
                seating_capacity: 4,
                doors: 2,
                generation: "Continental GT (3rd Gen Facelift)",
                country_of_origin: "United Kingdom",
                engine: EngineSpecs {
                    kind: "Twin-Turbocharged W12",
                    displacement: "6.0L (5,950 cc)",
                    horsepower: "650 hp @ 6,000 rpm",
                    torque: "664 lb-ft @ 1,500-5,000 rpm",
                },
                performance: PerformanceSpecs {
                    top_speed: "208 mph",
                    acceleration_0_60: "3.5 seconds",
                },
                transmission: TransmissionSpecs { kind: "ZF 8-Speed DCT", gears: 8 },
                curb_weight: "5,093 lbs",
                fuel_type: "Premium Unleaded",
                description: "The most dynamic Continental GT, driven by Bentley's W12 and all-wheel steering.",
            },
            CarModel::BentleyFlyingSpur => CarSpecs {
                make: "Bentley",
                model: "Flying Spur",
                body_type: "Sedan",
                drivetrain: "AWD",
                seating_capacity: 5,
                doors: 4,
                generation: "Flying Spur (3rd Gen)",
                country_of_origin: "United Kingdom",
                engine: EngineSpecs {
                    kind: "Twin-Turbocharged V8",
                    displacement: "4.0L (3,996 cc)",
                    horsepower: "542 hp @ 6,000 rpm",
                    torque: "568 lb-ft @ 2,000-4,500 rpm",
                },
                performance: PerformanceSpecs {
                    top_speed: "198 mph",
                    acceleration_0_60: "3.9 seconds",
                },
                transmission: TransmissionSpecs { kind: "ZF 8-Speed DCT", gears: 8 },
                curb_weight: "5,203 lbs",
                fuel_type: "Premium Unleaded",
                description: "A four-door grand tourer with a handcrafted cabin and a 542 hp V8.",
            },
        }
    }
}

/// Busca la ficha de un vehículo a partir de su marca y modelo
pub fn lookup(make: &str, model: &str) -> SpecLookup {
    match CarModel::from_make_model(make, model) {
        Some(id) => SpecLookup::Catalogued { id, specs: id.specs() },
        None => SpecLookup::Unlisted {
            make: make.to_string(),
            model: model.to_string(),
        },
    }
}

/// Marca -> modelos del catálogo, con los nombres tal como se muestran
pub fn catalog() -> BTreeMap<&'static str, Vec<&'static str>> {
    let mut catalog: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();
    for id in CarModel::ALL {
        let specs = id.specs();
        catalog.entry(specs.make).or_default().push(specs.model);
    }
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case_and_spacing() {
        let found = lookup("  PORSCHE ", "911   turbo s");
        assert!(matches!(
            found,
            SpecLookup::Catalogued { id: CarModel::Porsche911TurboS, .. }
        ));
        assert_eq!(found.specs().unwrap().transmission.gears, 8);
    }

    #[test]
    fn test_lookup_handles_accented_models() {
        assert_eq!(
            CarModel::from_make_model("Lamborghini", "huracán evo"),
            Some(CarModel::LamborghiniHuracanEvo)
        );
    }

    #[test]
    fn test_unknown_model_is_unlisted() {
        let found = lookup("Bugatti", "Chiron");
        assert_eq!(
            found,
            SpecLookup::Unlisted {
                make: "Bugatti".to_string(),
                model: "Chiron".to_string()
            }
        );
        assert!(found.specs().is_none());
    }

    #[test]
    fn test_catalog_groups_by_make() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 6);
        assert_eq!(
            catalog["Porsche"],
            vec!["911 Turbo S", "Cayenne Turbo GT", "Taycan Turbo S"]
        );
        assert_eq!(catalog.values().map(Vec::len).sum::<usize>(), 15);
    }

    #[test]
    fn test_every_entry_round_trips_through_lookup() {
        for id in CarModel::ALL {
            let specs = id.specs();
            assert_eq!(CarModel::from_make_model(specs.make, specs.model), Some(id));
        }
    }
}
