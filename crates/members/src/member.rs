use serde::{Deserialize, Serialize};

use libris_core::{Amount, Entity, MemberId};

use crate::payable::Payable;

/// Optional construction fields shared by every member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemberOptions {
    /// Defaults to `0` when omitted.
    pub member_id: Option<MemberId>,
}

impl MemberOptions {
    pub fn member_id(mut self, member_id: impl Into<MemberId>) -> Self {
        self.member_id = Some(member_id.into());
        self
    }
}

/// Fields common to every member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberInfo {
    name: String,
    member_id: MemberId,
}

impl MemberInfo {
    pub fn new(name: impl Into<String>, options: MemberOptions) -> Self {
        Self {
            name: name.into(),
            member_id: options.member_id.unwrap_or_default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn member_id(&self) -> MemberId {
        self.member_id
    }
}

/// Shared contract of library members.
pub trait LibraryMember {
    fn info(&self) -> &MemberInfo;

    /// Notice that this member borrowed an (unspecified) item.
    ///
    /// No catalog item is involved; this is not an inventory transaction.
    fn borrow_item(&self) -> String;

    fn name(&self) -> &str {
        self.info().name()
    }

    fn member_id(&self) -> MemberId {
        self.info().member_id()
    }

    fn display_member_info(&self) -> String {
        format!(
            "Member Name: {}, Member ID: {}",
            self.name(),
            self.member_id()
        )
    }
}

/// A student member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentMember {
    #[serde(flatten)]
    info: MemberInfo,
    course: String,
}

impl StudentMember {
    pub fn new(
        name: impl Into<String>,
        member_id: impl Into<MemberId>,
        course: impl Into<String>,
    ) -> Self {
        Self::with_options(name, course, MemberOptions::default().member_id(member_id))
    }

    /// Student without an assigned member id (id 0).
    pub fn named(name: impl Into<String>, course: impl Into<String>) -> Self {
        Self::with_options(name, course, MemberOptions::default())
    }

    pub fn with_options(
        name: impl Into<String>,
        course: impl Into<String>,
        options: MemberOptions,
    ) -> Self {
        Self {
            info: MemberInfo::new(name, options),
            course: course.into(),
        }
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn display_student_details(&self) -> String {
        format!(
            "Student {} is enrolled in {} course.",
            self.name(),
            self.course
        )
    }
}

impl LibraryMember for StudentMember {
    fn info(&self) -> &MemberInfo {
        &self.info
    }

    fn borrow_item(&self) -> String {
        format!("Student {} borrowed an item.", self.name())
    }
}

impl Payable for StudentMember {
    fn make_payment(&self, amount: Amount) -> String {
        format!("Student {} made a payment of {}", self.name(), amount)
    }
}

/// A staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    #[serde(flatten)]
    info: MemberInfo,
    department: String,
}

impl StaffMember {
    pub fn new(
        name: impl Into<String>,
        member_id: impl Into<MemberId>,
        department: impl Into<String>,
    ) -> Self {
        Self::with_options(
            name,
            department,
            MemberOptions::default().member_id(member_id),
        )
    }

    /// Staff member without an assigned member id (id 0).
    pub fn named(name: impl Into<String>, department: impl Into<String>) -> Self {
        Self::with_options(name, department, MemberOptions::default())
    }

    pub fn with_options(
        name: impl Into<String>,
        department: impl Into<String>,
        options: MemberOptions,
    ) -> Self {
        Self {
            info: MemberInfo::new(name, options),
            department: department.into(),
        }
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn display_staff_details(&self) -> String {
        format!(
            "Staff member {} works in the {} department.",
            self.name(),
            self.department
        )
    }
}

impl LibraryMember for StaffMember {
    fn info(&self) -> &MemberInfo {
        &self.info
    }

    fn borrow_item(&self) -> String {
        format!("Staff member {} borrowed an item.", self.name())
    }
}

impl Payable for StaffMember {
    fn make_payment(&self, amount: Amount) -> String {
        format!("Staff member {} made a payment of {}", self.name(), amount)
    }
}

/// Member kind: student or staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Student,
    Staff,
}

/// Any library member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Member {
    Student(StudentMember),
    Staff(StaffMember),
}

impl Member {
    pub fn kind(&self) -> MemberKind {
        match self {
            Member::Student(_) => MemberKind::Student,
            Member::Staff(_) => MemberKind::Staff,
        }
    }

    /// Every member kind can pay.
    pub fn as_payable(&self) -> &dyn Payable {
        match self {
            Member::Student(student) => student as &dyn Payable,
            Member::Staff(staff) => staff,
        }
    }
}

impl LibraryMember for Member {
    fn info(&self) -> &MemberInfo {
        match self {
            Member::Student(student) => student.info(),
            Member::Staff(staff) => staff.info(),
        }
    }

    fn borrow_item(&self) -> String {
        match self {
            Member::Student(student) => student.borrow_item(),
            Member::Staff(staff) => staff.borrow_item(),
        }
    }
}

impl Entity for Member {
    type Id = MemberId;

    fn id(&self) -> &Self::Id {
        &self.info().member_id
    }
}

impl From<StudentMember> for Member {
    fn from(value: StudentMember) -> Self {
        Member::Student(value)
    }
}

impl From<StaffMember> for Member {
    fn from(value: StaffMember) -> Self {
        Member::Staff(value)
    }
}
