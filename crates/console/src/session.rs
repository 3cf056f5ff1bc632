use std::io::{self, BufRead, Write};

use rand::Rng;

use qvault_core::{ObjectId, SessionId};
use qvault_inventory::{Inventory, InventoryError, Listing, Outcome};

use crate::menu::{MENU, MenuChoice};

/// Why a session stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose exit.
    Exited,
    /// Input closed.
    EndOfInput,
    /// An object collapsed; the session is over.
    Collapsed(ObjectId),
}

impl SessionEnd {
    pub fn is_failure(&self) -> bool {
        matches!(self, SessionEnd::Collapsed(_))
    }
}

/// One interactive session: the inventory it owns plus the generator used
/// for random creation.
pub struct Session<G> {
    id: SessionId,
    inventory: Inventory,
    rng: G,
}

impl<G: Rng> Session<G> {
    pub fn new(rng: G) -> Self {
        Self::with_inventory(Inventory::new(), rng)
    }

    pub fn with_inventory(inventory: Inventory, rng: G) -> Self {
        Self {
            id: SessionId::new(),
            inventory,
            rng,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Run the menu loop until exit, end of input or a collapse.
    ///
    /// Only I/O failures are returned as errors.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> io::Result<SessionEnd> {
        let span = tracing::info_span!("session", session_id = %self.id);
        let _guard = span.enter();
        tracing::info!("session started");

        let end = loop {
            writeln!(output, "{MENU}")?;
            write!(output, "Your choice: ")?;
            output.flush()?;

            let Some(line) = read_line(&mut input)? else {
                break SessionEnd::EndOfInput;
            };
            writeln!(output)?;

            let step = match MenuChoice::parse(&line) {
                Some(MenuChoice::CreateRandom) => self.create(&mut output)?,
                Some(MenuChoice::List) => self.list(&mut output)?,
                Some(MenuChoice::Analyze) => self.analyze(&mut input, &mut output)?,
                Some(MenuChoice::Cool) => self.cool(&mut input, &mut output)?,
                Some(MenuChoice::Exit) => Some(SessionEnd::Exited),
                None => {
                    tracing::warn!(input = %line, "invalid menu selection");
                    writeln!(output, "Invalid selection!")?;
                    None
                }
            };
            if let Some(end) = step {
                break end;
            }
            writeln!(output)?;
        };

        tracing::info!(end = ?end, objects = self.inventory.len(), "session ended");
        Ok(end)
    }

    fn create<W: Write>(&mut self, output: &mut W) -> io::Result<Option<SessionEnd>> {
        match self.inventory.create_random(&mut self.rng) {
            Ok(object) => writeln!(output, "New object added: {}", object.status_line())?,
            Err(err) => report(output, &err)?,
        }
        Ok(None)
    }

    fn list<W: Write>(&self, output: &mut W) -> io::Result<Option<SessionEnd>> {
        match self.inventory.list_all() {
            Listing::Empty => writeln!(output, "Inventory is empty.")?,
            Listing::Objects(lines) => {
                writeln!(output, "=== INVENTORY STATUS ===")?;
                for line in lines {
                    writeln!(output, "{line}")?;
                }
            }
        }
        Ok(None)
    }

    fn analyze<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<Option<SessionEnd>> {
        let Some(id) = self.prompt_id(input, output, "Enter the ID of the object to analyze: ")?
        else {
            return Ok(self.storage_or_eof());
        };
        let result = self.inventory.analyze_by_id(&id);
        settle(output, result)
    }

    fn cool<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<Option<SessionEnd>> {
        let Some(id) = self.prompt_id(input, output, "Enter the ID of the object to cool: ")?
        else {
            return Ok(self.storage_or_eof());
        };
        let result = self.inventory.cool_by_id(&id);
        settle(output, result)
    }

    /// Empty storage is reported before asking for an id. `None` means
    /// nothing to act on (empty storage or closed input).
    fn prompt_id<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
        prompt: &str,
    ) -> io::Result<Option<String>> {
        if self.inventory.is_empty() {
            report(output, &InventoryError::StorageEmpty)?;
            return Ok(None);
        }
        write!(output, "{prompt}")?;
        output.flush()?;
        read_line(input)
    }

    fn storage_or_eof(&self) -> Option<SessionEnd> {
        if self.inventory.is_empty() {
            None
        } else {
            Some(SessionEnd::EndOfInput)
        }
    }
}

fn settle<W: Write>(
    output: &mut W,
    result: Result<Outcome, InventoryError>,
) -> io::Result<Option<SessionEnd>> {
    match result {
        Ok(outcome) => {
            writeln!(output, "{}", outcome.message)?;
            writeln!(output, "Current status: {}", outcome.status)?;
            Ok(None)
        }
        Err(InventoryError::Collapse(id)) => {
            writeln!(output)?;
            writeln!(output, "SYSTEM FAILURE! EVACUATION INITIATED...")?;
            writeln!(output, "{}", InventoryError::Collapse(id.clone()))?;
            output.flush()?;
            Ok(Some(SessionEnd::Collapsed(id)))
        }
        Err(err) => {
            report(output, &err)?;
            Ok(None)
        }
    }
}

/// User-facing text for recoverable errors.
fn report<W: Write>(output: &mut W, err: &InventoryError) -> io::Result<()> {
    match err {
        InventoryError::StorageEmpty => writeln!(output, "Storage is completely empty."),
        InventoryError::NotFound(_) => writeln!(output, "Object not found!"),
        InventoryError::NotCoolingCapable { kind, .. } => writeln!(
            output,
            "This object cannot be cooled! ({kind} is not cooling-capable)"
        ),
        other => writeln!(output, "Command rejected: {other}"),
    }
}

/// One line without its terminator; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    Ok(Some(line))
}
