//! Identity wrappers naming the issue whose comments are analyzed.

use super::error::AnalysisError;

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    /// Validates that the owner is non-empty after trimming.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidOwner`] when the value is blank.
    pub fn new(value: &str) -> Result<Self, AnalysisError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AnalysisError::InvalidOwner);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Validates that the repository name is non-empty after trimming.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidRepository`] when the value is blank.
    pub fn new(value: &str) -> Result<Self, AnalysisError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AnalysisError::InvalidRepository);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Issue number parsed from the request.
///
/// Any non-negative integer is accepted; a number with no matching issue
/// simply fails upstream when the comments are fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueNumber(u64);

impl IssueNumber {
    /// Parses an issue number from its query-parameter form.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidIssueNumber`] when the value does not
    /// parse as a non-negative integer.
    pub fn parse(value: &str) -> Result<Self, AnalysisError> {
        value
            .trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| AnalysisError::InvalidIssueNumber)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::MissingToken`] when the supplied string is
    /// blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, AnalysisError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(AnalysisError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// Validated identity of the issue whose comment thread is analyzed.
///
/// Unlike a URL-derived locator, this type is assembled from the three
/// query parameters of an analysis request; the API base URL is a
/// process-wide concern owned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueLocator {
    owner: RepositoryOwner,
    repository: RepositoryName,
    number: IssueNumber,
}

impl IssueLocator {
    /// Builds a locator from raw owner, repository, and issue number values.
    ///
    /// # Errors
    ///
    /// Returns the validation error of the first parameter that fails:
    /// [`AnalysisError::InvalidOwner`], [`AnalysisError::InvalidRepository`],
    /// or [`AnalysisError::InvalidIssueNumber`].
    pub fn from_parameters(
        owner: &str,
        repository: &str,
        issue_number: &str,
    ) -> Result<Self, AnalysisError> {
        Ok(Self {
            owner: RepositoryOwner::new(owner)?,
            repository: RepositoryName::new(repository)?,
            number: IssueNumber::parse(issue_number)?,
        })
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Issue number.
    #[must_use]
    pub const fn number(&self) -> IssueNumber {
        self.number
    }

    pub(crate) fn comments_path(&self) -> String {
        format!(
            "/repos/{}/{}/issues/{}/comments",
            self.owner.as_str(),
            self.repository.as_str(),
            self.number.get()
        )
    }
}
