use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use qvault_core::{Aggregate, AggregateRoot, DomainError, DomainResult, ObjectId};
use qvault_events::{Event, execute};

use crate::kind::{COOLING_BOOST, Capability, ObjectKind};
use crate::stability::{DangerLevel, Stability};

/// Errors raised by quantum object operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ObjectError {
    /// Stability hit the floor. Fatal for the whole session.
    #[error("quantum collapse! failing object id: {0}")]
    Collapsed(ObjectId),

    /// Recoverable rejection (bad amount, missing capability, collapsed target).
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ObjectError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, ObjectError::Collapsed(_))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectState {
    Stable,
    /// Terminal.
    Collapsed,
}

/// Aggregate root: QuantumObject.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantumObject {
    id: ObjectId,
    kind: ObjectKind,
    stability: Stability,
    danger_level: DangerLevel,
    state: ObjectState,
    version: u64,
}

impl QuantumObject {
    /// A freshly created object must start above the collapse floor.
    pub fn new(
        id: ObjectId,
        kind: ObjectKind,
        stability: Stability,
        danger_level: DangerLevel,
    ) -> DomainResult<Self> {
        if stability.is_exhausted() {
            return Err(DomainError::invariant(format!(
                "object {id} cannot be created without stability"
            )));
        }
        Ok(Self {
            id,
            kind,
            stability,
            danger_level,
            state: ObjectState::Stable,
            version: 0,
        })
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn stability(&self) -> Stability {
        self.stability
    }

    pub fn danger_level(&self) -> DangerLevel {
        self.danger_level
    }

    pub fn state(&self) -> ObjectState {
        self.state
    }

    pub fn supports(&self, capability: Capability) -> bool {
        self.kind.supports(capability)
    }

    /// Subtract `amount` from stability.
    ///
    /// Landing at or below zero collapses the object and returns
    /// `ObjectError::Collapsed`; stability then reads 0.
    pub fn deplete(&mut self, amount: f64) -> Result<Vec<ObjectEvent>, ObjectError> {
        let events = execute(
            self,
            &ObjectCommand::Deplete {
                amount,
                occurred_at: Utc::now(),
            },
        )?;
        if self.state == ObjectState::Collapsed {
            return Err(ObjectError::Collapsed(self.id.clone()));
        }
        Ok(events)
    }

    /// Add `amount` to stability, capped at the maximum.
    pub fn restore(&mut self, amount: f64) -> Result<Vec<ObjectEvent>, ObjectError> {
        execute(
            self,
            &ObjectCommand::Restore {
                amount,
                occurred_at: Utc::now(),
            },
        )
    }

    /// Run the variant's analysis, paying its stability cost.
    pub fn analyze(&mut self) -> Result<Reaction, ObjectError> {
        let events = self.deplete(self.kind.analysis_cost())?;
        Ok(Reaction {
            message: self.kind.analysis_message(),
            events,
        })
    }

    /// Restore `COOLING_BOOST` stability on cooling-capable variants.
    ///
    /// Other variants are rejected with `DomainError::Unsupported` and left
    /// untouched.
    pub fn emergency_cool(&mut self) -> Result<Reaction, ObjectError> {
        let Some(message) = self.kind.cooling_message() else {
            return Err(DomainError::unsupported(format!(
                "{} {} is not cooling-capable",
                self.kind, self.id
            ))
            .into());
        };
        let events = self.restore(COOLING_BOOST)?;
        Ok(Reaction { message, events })
    }

    pub fn status_line(&self) -> String {
        format!(
            "[{}] ID: {}, Stability: {}, Danger: {}",
            self.kind, self.id, self.stability, self.danger_level
        )
    }
}

impl AggregateRoot for QuantumObject {
    type Id = ObjectId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Outcome of `analyze` / `emergency_cool`: flavour text plus emitted events.
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    pub message: &'static str,
    pub events: Vec<ObjectEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectCommand {
    Deplete {
        amount: f64,
        occurred_at: DateTime<Utc>,
    },
    Restore {
        amount: f64,
        occurred_at: DateTime<Utc>,
    },
}

/// Event: StabilityDepleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityDepleted {
    pub object_id: ObjectId,
    pub amount: f64,
    /// Clamped stability after the change.
    pub stability: f64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: StabilityRestored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityRestored {
    pub object_id: ObjectId,
    pub amount: f64,
    pub stability: f64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ObjectCollapsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectCollapsed {
    pub object_id: ObjectId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectEvent {
    StabilityDepleted(StabilityDepleted),
    StabilityRestored(StabilityRestored),
    ObjectCollapsed(ObjectCollapsed),
}

impl Event for ObjectEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ObjectEvent::StabilityDepleted(_) => "object.stability.depleted",
            ObjectEvent::StabilityRestored(_) => "object.stability.restored",
            ObjectEvent::ObjectCollapsed(_) => "object.collapsed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            ObjectEvent::StabilityDepleted(e) => e.occurred_at,
            ObjectEvent::StabilityRestored(e) => e.occurred_at,
            ObjectEvent::ObjectCollapsed(e) => e.occurred_at,
        }
    }
}

impl Aggregate for QuantumObject {
    type Command = ObjectCommand;
    type Event = ObjectEvent;
    type Error = ObjectError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            ObjectEvent::StabilityDepleted(e) => {
                self.stability = self.stability.depleted(e.amount);
            }
            ObjectEvent::StabilityRestored(e) => {
                self.stability = self.stability.restored(e.amount);
            }
            ObjectEvent::ObjectCollapsed(_) => {
                self.stability = Stability::ZERO;
                self.state = ObjectState::Collapsed;
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        if self.state == ObjectState::Collapsed {
            return Err(DomainError::invariant(format!("object {} has collapsed", self.id)).into());
        }
        match command {
            ObjectCommand::Deplete {
                amount,
                occurred_at,
            } => self.handle_deplete(*amount, *occurred_at),
            ObjectCommand::Restore {
                amount,
                occurred_at,
            } => self.handle_restore(*amount, *occurred_at),
        }
    }
}

impl QuantumObject {
    fn ensure_amount(amount: f64) -> Result<(), DomainError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(DomainError::validation(format!(
                "amount must be a non-negative number, got {amount}"
            )));
        }
        Ok(())
    }

    fn handle_deplete(
        &self,
        amount: f64,
        occurred_at: DateTime<Utc>,
    ) -> Result<Vec<ObjectEvent>, ObjectError> {
        Self::ensure_amount(amount)?;

        let after = self.stability.depleted(amount);
        let mut events = vec![ObjectEvent::StabilityDepleted(StabilityDepleted {
            object_id: self.id.clone(),
            amount,
            stability: after.value(),
            occurred_at,
        })];

        // Exact-zero landings collapse too.
        if self.stability.value() - amount <= Stability::MIN {
            events.push(ObjectEvent::ObjectCollapsed(ObjectCollapsed {
                object_id: self.id.clone(),
                occurred_at,
            }));
        }
        Ok(events)
    }

    fn handle_restore(
        &self,
        amount: f64,
        occurred_at: DateTime<Utc>,
    ) -> Result<Vec<ObjectEvent>, ObjectError> {
        Self::ensure_amount(amount)?;

        Ok(vec![ObjectEvent::StabilityRestored(StabilityRestored {
            object_id: self.id.clone(),
            amount,
            stability: self.stability.restored(amount).value(),
            occurred_at,
        })])
    }
}
