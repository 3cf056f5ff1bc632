use rand::Rng;

use qvault_core::{AggregateRoot, ObjectId};
use qvault_events::Event;
use qvault_objects::{
    Capability, DangerLevel, ObjectError, ObjectEvent, QuantumObject, Reaction, Stability,
};

use crate::blueprint::Blueprint;
use crate::error::InventoryError;

/// Result of `Inventory::list_all`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Empty,
    /// Status lines in insertion order.
    Objects(Vec<String>),
}

/// A successful analyze/cool: the object's message and its updated status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub message: &'static str,
    pub status: String,
}

/// Append-only, insertion-ordered collection of quantum objects.
#[derive(Debug, Clone)]
pub struct Inventory {
    objects: Vec<QuantumObject>,
    next_seq: u64,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            next_seq: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuantumObject> {
        self.objects.iter()
    }

    /// Roll a random blueprint and store the resulting object.
    pub fn create_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<&QuantumObject, InventoryError> {
        self.create(Blueprint::roll(rng))
    }

    /// Store a new object built from `blueprint`.
    ///
    /// The id is `<variant tag>-<n>`, where `n` comes from one counter shared
    /// by all variants. A rejected blueprint does not consume a number.
    pub fn create(&mut self, blueprint: Blueprint) -> Result<&QuantumObject, InventoryError> {
        let stability = Stability::new(blueprint.stability)?;
        let danger_level = DangerLevel::new(blueprint.danger_level)?;
        let id = ObjectId::sequenced(blueprint.kind.tag(), self.next_seq);
        let object = QuantumObject::new(id, blueprint.kind, stability, danger_level)?;

        self.next_seq += 1;
        tracing::info!(
            object_id = %object.id(),
            kind = %object.kind(),
            stability = object.stability().value(),
            danger_level = object.danger_level().get(),
            "object created"
        );
        self.objects.push(object);

        let idx = self.objects.len() - 1;
        Ok(&self.objects[idx])
    }

    pub fn list_all(&self) -> Listing {
        if self.objects.is_empty() {
            return Listing::Empty;
        }
        Listing::Objects(self.objects.iter().map(QuantumObject::status_line).collect())
    }

    /// First object whose id matches `id` ignoring case.
    pub fn find_by_id(&self, id: &str) -> Result<&QuantumObject, InventoryError> {
        self.objects
            .iter()
            .find(|o| o.id().matches(id))
            .ok_or_else(|| InventoryError::NotFound(id.to_string()))
    }

    /// Analyze the object with `id`. A collapse is returned as
    /// `InventoryError::Collapse` and must end the session.
    pub fn analyze_by_id(&mut self, id: &str) -> Result<Outcome, InventoryError> {
        let object = self.locate(id)?;
        let result = object.analyze();
        Self::settle(object, result)
    }

    /// Emergency-cool the object with `id`, if its variant supports cooling.
    pub fn cool_by_id(&mut self, id: &str) -> Result<Outcome, InventoryError> {
        let object = self.locate(id)?;
        if !object.supports(Capability::Cooling) {
            tracing::warn!(object_id = %object.id(), kind = %object.kind(), "cooling rejected");
            return Err(InventoryError::NotCoolingCapable {
                id: object.id().clone(),
                kind: object.kind(),
            });
        }
        let result = object.emergency_cool();
        Self::settle(object, result)
    }

    fn locate(&mut self, id: &str) -> Result<&mut QuantumObject, InventoryError> {
        if self.objects.is_empty() {
            return Err(InventoryError::StorageEmpty);
        }
        self.objects
            .iter_mut()
            .find(|o| o.id().matches(id))
            .ok_or_else(|| InventoryError::NotFound(id.to_string()))
    }

    fn settle(
        object: &QuantumObject,
        result: Result<Reaction, ObjectError>,
    ) -> Result<Outcome, InventoryError> {
        match result {
            Ok(reaction) => {
                log_events(&reaction.events);
                Ok(Outcome {
                    message: reaction.message,
                    status: object.status_line(),
                })
            }
            Err(err) => {
                let err = InventoryError::from(err);
                if err.is_fatal() {
                    tracing::error!(object_id = %object.id(), "stability collapse");
                } else {
                    tracing::warn!(object_id = %object.id(), error = %err, "command rejected");
                }
                Err(err)
            }
        }
    }
}

fn log_events(events: &[ObjectEvent]) {
    for ev in events {
        match serde_json::to_string(ev) {
            Ok(payload) => tracing::debug!(
                event_type = ev.event_type(),
                schema_version = ev.version(),
                %payload,
                "domain event"
            ),
            Err(err) => tracing::warn!(
                event_type = ev.event_type(),
                error = %err,
                "failed to serialize domain event"
            ),
        }
    }
}
