use super::error::AppError;

/// Granularity of the sales trend view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFrame {
    #[default]
    Monthly,
    Yearly,
}

impl TimeFrame {
    pub fn label(&self) -> &'static str {
        match self {
            TimeFrame::Monthly => "Monthly",
            TimeFrame::Yearly => "Yearly",
        }
    }

    pub fn all() -> &'static [TimeFrame] {
        &[TimeFrame::Monthly, TimeFrame::Yearly]
    }
}

impl std::str::FromStr for TimeFrame {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monthly" => Ok(TimeFrame::Monthly),
            "yearly" => Ok(TimeFrame::Yearly),
            _ => Err(AppError::Config(format!("Invalid time frame: {s}"))),
        }
    }
}

/// Product categories known to the backend catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Electronics,
    Appliances,
    Furniture,
    Wearables,
    Health,
    Home,
    Fitness,
}

impl Category {
    /// Query-parameter value, `None` when no filtering is requested.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Category::All => None,
            Category::Electronics => Some("Electronics"),
            Category::Appliances => Some("Appliances"),
            Category::Furniture => Some("Furniture"),
            Category::Wearables => Some("Wearables"),
            Category::Health => Some("Health"),
            Category::Home => Some("Home"),
            Category::Fitness => Some("Fitness"),
        }
    }

    pub fn label(&self) -> &'static str {
        self.code().unwrap_or("All categories")
    }

    pub fn all() -> &'static [Category] {
        &[
            Category::All,
            Category::Electronics,
            Category::Appliances,
            Category::Furniture,
            Category::Wearables,
            Category::Health,
            Category::Home,
            Category::Fitness,
        ]
    }
}

impl std::str::FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" | "" => Ok(Category::All),
            "electronics" => Ok(Category::Electronics),
            "appliances" => Ok(Category::Appliances),
            "furniture" => Ok(Category::Furniture),
            "wearables" => Ok(Category::Wearables),
            "health" => Ok(Category::Health),
            "home" => Ok(Category::Home),
            "fitness" => Ok(Category::Fitness),
            _ => Err(AppError::Config(format!("Invalid category: {s}"))),
        }
    }
}

/// Sales regions used by the reporting backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    #[default]
    All,
    NorthAmerica,
    Europe,
    AsiaPacific,
    LatinAmerica,
    MiddleEast,
    Africa,
}

impl Region {
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Region::All => None,
            Region::NorthAmerica => Some("North America"),
            Region::Europe => Some("Europe"),
            Region::AsiaPacific => Some("Asia Pacific"),
            Region::LatinAmerica => Some("Latin America"),
            Region::MiddleEast => Some("Middle East"),
            Region::Africa => Some("Africa"),
        }
    }

    pub fn label(&self) -> &'static str {
        self.code().unwrap_or("All regions")
    }

    pub fn all() -> &'static [Region] {
        &[
            Region::All,
            Region::NorthAmerica,
            Region::Europe,
            Region::AsiaPacific,
            Region::LatinAmerica,
            Region::MiddleEast,
            Region::Africa,
        ]
    }
}

impl std::str::FromStr for Region {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" | "" => Ok(Region::All),
            "north america" => Ok(Region::NorthAmerica),
            "europe" => Ok(Region::Europe),
            "asia pacific" => Ok(Region::AsiaPacific),
            "latin america" => Ok(Region::LatinAmerica),
            "middle east" => Ok(Region::MiddleEast),
            "africa" => Ok(Region::Africa),
            _ => Err(AppError::Config(format!("Invalid region: {s}"))),
        }
    }
}

/// User-selected facet values for the sales page.
///
/// Owned by the page component, handed down read-only, and replaced
/// wholesale on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterState {
    pub time_frame: TimeFrame,
    pub category: Category,
    pub region: Region,
}

impl FilterState {
    pub fn with_time_frame(self, time_frame: TimeFrame) -> Self {
        Self { time_frame, ..self }
    }

    pub fn with_category(self, category: Category) -> Self {
        Self { category, ..self }
    }

    pub fn with_region(self, region: Region) -> Self {
        Self { region, ..self }
    }
}
