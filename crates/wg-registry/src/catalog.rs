//! The built-in reference catalog: eight animals patrolling near eight
//! villages bordering Indian national parks.

use wg_core::{GeoPoint, MoverKind, RiskTier};

use crate::{Registry, RegistryBuilder, RegistryResult};

type Waypoints = &'static [(f64, f64)];

const MOVERS: &[(&str, MoverKind, f64, Waypoints)] = &[
    ("Tusker Alpha", MoverKind::Elephant, 0.001, &[
        (29.5319, 78.7718), (29.5330, 78.7730), (29.5345, 78.7745), (29.5360, 78.7760),
        (29.5375, 78.7775), (29.5390, 78.7790), (29.5405, 78.7805), (29.5420, 78.7820),
    ]),
    ("Gentle Giant", MoverKind::Elephant, 0.0006, &[
        (26.5775, 93.1716), (26.5785, 93.1730), (26.5800, 93.1745), (26.5815, 93.1760),
        (26.5830, 93.1775), (26.5845, 93.1790), (26.5860, 93.1805),
    ]),
    ("Stripe King", MoverKind::Tiger, 0.0008, &[
        (26.0212, 76.5028), (26.0225, 76.5040), (26.0240, 76.5055), (26.0255, 76.5070),
        (26.0270, 76.5085), (26.0285, 76.5100), (26.0300, 76.5115),
    ]),
    ("Shadow Hunter", MoverKind::Tiger, 0.0004, &[
        (21.9497, 88.4297), (21.9510, 88.4310), (21.9525, 88.4325), (21.9540, 88.4340),
        (21.9555, 88.4355), (21.9570, 88.4370), (21.9585, 88.4385),
    ]),
    ("Mane Majesty", MoverKind::Lion, 0.0002, &[
        (21.1681, 70.8202), (21.1695, 70.8215), (21.1710, 70.8230), (21.1725, 70.8245),
        (21.1740, 70.8260), (21.1755, 70.8275), (21.1770, 70.8290),
    ]),
    ("Spot Master", MoverKind::Leopard, 0.0012, &[
        (11.6500, 76.6333), (11.6515, 76.6348), (11.6530, 76.6363), (11.6545, 76.6378),
        (11.6560, 76.6393), (11.6575, 76.6408), (11.6590, 76.6423),
    ]),
    ("Forest Guardian", MoverKind::Bear, 0.0003, &[
        (11.6600, 76.6400), (11.6610, 76.6410), (11.6625, 76.6425), (11.6640, 76.6440),
        (11.6655, 76.6455), (11.6670, 76.6470), (11.6685, 76.6485),
    ]),
    ("Forest Phantom", MoverKind::Tiger, 0.00016, &[
        (22.3364, 80.6409), (22.3375, 80.6420), (22.3390, 80.6435), (22.3405, 80.6450),
        (22.3420, 80.6465), (22.3435, 80.6480), (22.3450, 80.6495),
    ]),
];

const WATCH_POINTS: &[(&str, f64, f64, u32, RiskTier)] = &[
    ("Corbett Village",     29.5390, 78.7790, 450, RiskTier::High),
    ("Kaziranga Village",   26.5830, 93.1775, 320, RiskTier::Medium),
    ("Ranthambore Village", 26.0270, 76.5085, 380, RiskTier::High),
    ("Sundarbans Village",  21.9555, 88.4355, 280, RiskTier::Medium),
    ("Gir Village",         21.1740, 70.8260, 350, RiskTier::Low),
    ("Bandipur Village",    11.6560, 76.6393, 400, RiskTier::High),
    ("Mountain Village",    11.6655, 76.6455, 220, RiskTier::Medium),
    ("Kanha Village",       22.3420, 80.6465, 310, RiskTier::Low),
];

impl Registry {
    /// Build the reference catalog.
    pub fn reference_catalog() -> RegistryResult<Registry> {
        let mut b = RegistryBuilder::new();
        for &(label, kind, speed, route) in MOVERS {
            let route = route.iter().map(|&(lat, lon)| GeoPoint::new(lat, lon)).collect();
            b.add_mover(label, kind, speed, route);
        }
        for &(label, lat, lon, population, risk) in WATCH_POINTS {
            b.add_watch_point(label, GeoPoint::new(lat, lon), population, risk);
        }
        b.build()
    }
}
