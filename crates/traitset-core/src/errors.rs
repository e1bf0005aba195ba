use thiserror::Error;

/// Result type alias using TraitError
pub type Result<T> = std::result::Result<T, TraitError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling and for assertions in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Instantiation
    MissingRequired,
    UnresolvedConflict,

    // Object runtime
    ReadOnly,
    MissingSetter,
    NotConfigurable,
    NotFound,
    NotCallable,

    // Raised by user methods
    Thrown,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::MissingRequired => "ERR_MISSING_REQUIRED",
            ExErrorKind::UnresolvedConflict => "ERR_UNRESOLVED_CONFLICT",
            ExErrorKind::ReadOnly => "ERR_READ_ONLY",
            ExErrorKind::MissingSetter => "ERR_MISSING_SETTER",
            ExErrorKind::NotConfigurable => "ERR_NOT_CONFIGURABLE",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::NotCallable => "ERR_NOT_CALLABLE",
            ExErrorKind::Thrown => "ERR_THROWN",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the context
/// (operation, member name, message) needed when reporting it.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    member: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            member: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add member name context
    pub fn with_member(mut self, name: impl Into<String>) -> Self {
        self.member = Some(name.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the member name context, if any
    pub fn member(&self) -> Option<&str> {
        self.member.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(member) = &self.member {
            write!(f, " (member: {})", member)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for trait instantiation and the object runtime
///
/// Only `create` raises `MissingRequiredMember` and `UnresolvedConflict`; every
/// other trait operation is total. The remaining variants come from reading,
/// writing and calling members on materialized objects.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TraitError {
    // ===== Instantiation Errors =====
    /// A required member was neither supplied nor inherited
    #[error("Missing required property: {name}")]
    MissingRequiredMember { name: String },

    /// A conflict placeholder survived until instantiation
    #[error("Remaining conflicting property: {name}")]
    UnresolvedConflict { name: String },

    // ===== Object Runtime Errors =====
    /// Assignment to a non-writable data member
    #[error("Cannot assign to read-only property: {name}")]
    ReadOnlyMember { name: String },

    /// Assignment to an accessor member without a setter
    #[error("Cannot assign to property without setter: {name}")]
    MissingSetter { name: String },

    /// Redefinition or deletion of a non-configurable member
    #[error("Cannot redefine non-configurable property: {name}")]
    NotConfigurable { name: String },

    /// Call of a member that exists neither on the object nor its prototypes
    #[error("Property not found: {name}")]
    MemberNotFound { name: String },

    /// Call of a member whose value is not a function
    #[error("Property is not a function: {name}")]
    NotCallable { name: String },

    // ===== Generic Errors =====
    /// Failure raised from inside a method, getter or setter
    #[error("{message}")]
    Thrown { message: String },
}

impl TraitError {
    /// Convenience constructor for failures raised by user code
    pub fn thrown(message: impl Into<String>) -> Self {
        TraitError::Thrown {
            message: message.into(),
        }
    }

    /// The member name this error refers to, if any
    pub fn member(&self) -> Option<&str> {
        match self {
            TraitError::MissingRequiredMember { name }
            | TraitError::UnresolvedConflict { name }
            | TraitError::ReadOnlyMember { name }
            | TraitError::MissingSetter { name }
            | TraitError::NotConfigurable { name }
            | TraitError::MemberNotFound { name }
            | TraitError::NotCallable { name } => Some(name),
            TraitError::Thrown { .. } => None,
        }
    }
}

/// Conversion from TraitError to ExError
impl From<TraitError> for ExError {
    fn from(err: TraitError) -> Self {
        match err {
            TraitError::MissingRequiredMember { name } => {
                ExError::new(ExErrorKind::MissingRequired)
                    .with_op("create")
                    .with_member(name)
                    .with_message("Required member is not provided")
            }

            TraitError::UnresolvedConflict { name } => {
                ExError::new(ExErrorKind::UnresolvedConflict)
                    .with_op("create")
                    .with_member(name)
                    .with_message("Conflicting definitions were never resolved")
            }

            TraitError::ReadOnlyMember { name } => ExError::new(ExErrorKind::ReadOnly)
                .with_op("set")
                .with_member(name)
                .with_message("Member is not writable"),

            TraitError::MissingSetter { name } => ExError::new(ExErrorKind::MissingSetter)
                .with_op("set")
                .with_member(name)
                .with_message("Accessor has no setter"),

            TraitError::NotConfigurable { name } => ExError::new(ExErrorKind::NotConfigurable)
                .with_member(name)
                .with_message("Member is not configurable"),

            TraitError::MemberNotFound { name } => ExError::new(ExErrorKind::NotFound)
                .with_op("call")
                .with_member(name)
                .with_message("Member not found"),

            TraitError::NotCallable { name } => ExError::new(ExErrorKind::NotCallable)
                .with_op("call")
                .with_member(name)
                .with_message("Member is not a function"),

            TraitError::Thrown { message } => {
                ExError::new(ExErrorKind::Thrown).with_message(message)
            }
        }
    }
}
