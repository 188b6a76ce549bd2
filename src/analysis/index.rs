use std::collections::HashMap;

use crate::models::{Client, Vehicle};

/// Mapas id → entidad construidos una vez por carga de datos
#[derive(Debug, Clone, Default)]
pub struct LookupIndex {
    vehicles: HashMap<i64, Vehicle>,
    clients: HashMap<i64, Client>,
}

impl LookupIndex {
    /// Si hay ids repetidos se conserva la primera aparición
    pub fn build(vehicles: &[Vehicle], clients: &[Client]) -> Self {
        let mut index = Self::default();
        for vehicle in vehicles {
            index.vehicles.entry(vehicle.id).or_insert_with(|| vehicle.clone());
        }
        for client in clients {
            index.clients.entry(client.id).or_insert_with(|| client.clone());
        }
        index
    }

    pub fn vehicle(&self, id: i64) -> Option<&Vehicle> {
        self.vehicles.get(&id)
    }

    pub fn client(&self, id: i64) -> Option<&Client> {
        self.clients.get(&id)
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures;
    use crate::models::VehicleStatus;

    #[test]
    fn test_lookup_by_id() {
        let index = LookupIndex::build(&fixtures::vehicles(), &fixtures::clients());
        assert_eq!(index.vehicle(2).unwrap().make, "Ferrari");
        assert_eq!(index.client(3).unwrap().last_name, "Sterling");
        assert!(index.vehicle(99).is_none());
        assert_eq!(index.vehicle_count(), 5);
        assert_eq!(index.client_count(), 3);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let vehicles = vec![
            fixtures::vehicle(1, "Porsche", "911", 100.0, VehicleStatus::Sold),
            fixtures::vehicle(1, "Ferrari", "Roma", 200.0, VehicleStatus::Sold),
        ];
        let index = LookupIndex::build(&vehicles, &[]);
        assert_eq!(index.vehicle(1).unwrap().make, "Porsche");
    }
}
