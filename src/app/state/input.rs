use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptField {
    Location,
    StartDate,
    EndDate,
    Threshold,
}

impl PromptField {
    pub fn title(self) -> &'static str {
        match self {
            Self::Location => "Add location (lat,lon)",
            Self::StartDate => "Start date (YYYY-MM-DD)",
            Self::EndDate => "End date (YYYY-MM-DD)",
            Self::Threshold => "Threshold (empty for none)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub field: PromptField,
    pub buffer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyCommand {
    Quit,
    AddLocation,
    RemoveLocation(usize),
    ClearLocations,
    NextParameter,
    PreviousParameter,
    EditStart,
    EditEnd,
    EditThreshold,
    GetData,
    ToggleTheme,
    Export,
}

pub(crate) fn command_from_char(ch: char) -> Option<KeyCommand> {
    match ch {
        'q' => Some(KeyCommand::Quit),
        'a' => Some(KeyCommand::AddLocation),
        '1' => Some(KeyCommand::RemoveLocation(0)),
        '2' => Some(KeyCommand::RemoveLocation(1)),
        'x' => Some(KeyCommand::ClearLocations),
        'p' => Some(KeyCommand::NextParameter),
        'P' => Some(KeyCommand::PreviousParameter),
        's' => Some(KeyCommand::EditStart),
        'e' => Some(KeyCommand::EditEnd),
        'h' => Some(KeyCommand::EditThreshold),
        'g' => Some(KeyCommand::GetData),
        't' => Some(KeyCommand::ToggleTheme),
        'o' => Some(KeyCommand::Export),
        _ => None,
    }
}

fn is_prompt_char(field: PromptField, ch: char) -> bool {
    match field {
        PromptField::Location => ch.is_ascii_digit() || matches!(ch, '.' | ',' | '-' | '+' | ' '),
        PromptField::StartDate | PromptField::EndDate => ch.is_ascii_digit() || ch == '-',
        PromptField::Threshold => ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E'),
    }
}

impl DashboardState {
    pub(crate) async fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            tx.send(AppEvent::Quit).await?;
            return Ok(());
        }
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return Ok(());
        }
        self.handle_main_key(key, tx).await
    }

    async fn handle_main_key(&mut self, key: KeyEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match key.code {
            KeyCode::Esc => tx.send(AppEvent::Quit).await?,
            KeyCode::Enter => self.start_run(tx),
            KeyCode::Char(ch) => {
                if let Some(command) = command_from_char(ch) {
                    self.apply_command(command, tx).await?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    pub(crate) async fn apply_command(
        &mut self,
        command: KeyCommand,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        match command {
            KeyCommand::Quit => tx.send(AppEvent::Quit).await?,
            KeyCommand::AddLocation => self.open_location_prompt(),
            KeyCommand::RemoveLocation(idx) => self.remove_location(idx),
            KeyCommand::ClearLocations => self.clear_locations(),
            KeyCommand::NextParameter => self.cycle_parameter(1),
            KeyCommand::PreviousParameter => self.cycle_parameter(-1),
            KeyCommand::EditStart => self.open_prompt(PromptField::StartDate),
            KeyCommand::EditEnd => self.open_prompt(PromptField::EndDate),
            KeyCommand::EditThreshold => self.open_prompt(PromptField::Threshold),
            KeyCommand::GetData => self.start_run(tx),
            KeyCommand::ToggleTheme => self.toggle_theme(),
            KeyCommand::Export => self.export(),
        }
        Ok(())
    }

    /// Picking a third location is refused up front, the way a map click
    /// would be.
    pub(crate) fn open_location_prompt(&mut self) {
        if self.selection.is_full() {
            self.notice = Some(
                ValidationError::SelectionFull {
                    max: crate::domain::MAX_LOCATIONS,
                }
                .to_string(),
            );
            return;
        }
        self.open_prompt(PromptField::Location);
    }

    pub(crate) fn open_prompt(&mut self, field: PromptField) {
        let buffer = match field {
            PromptField::Location => String::new(),
            PromptField::StartDate => self.form.start.clone(),
            PromptField::EndDate => self.form.end.clone(),
            PromptField::Threshold => self.form.threshold.clone(),
        };
        self.prompt = Some(Prompt { field, buffer });
    }

    pub(crate) fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Some(field) = self.prompt.as_ref().map(|prompt| prompt.field) else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.prompt = None,
            KeyCode::Enter => self.submit_prompt(),
            KeyCode::Backspace => {
                if let Some(prompt) = self.prompt.as_mut() {
                    prompt.buffer.pop();
                }
            }
            KeyCode::Char(ch) if is_prompt_char(field, ch) => {
                if let Some(prompt) = self.prompt.as_mut() {
                    prompt.buffer.push(ch);
                }
            }
            _ => {}
        }
    }

    pub(crate) fn submit_prompt(&mut self) {
        let Some(Prompt { field, buffer }) = self.prompt.take() else {
            return;
        };
        let value = buffer.trim().to_string();
        match field {
            PromptField::Location => match value.parse::<Location>() {
                Ok(location) => self.add_location(location),
                Err(err) => self.notice = Some(err.to_string()),
            },
            PromptField::StartDate => self.form.start = value,
            PromptField::EndDate => self.form.end = value,
            PromptField::Threshold => self.form.threshold = value,
        }
    }
}
