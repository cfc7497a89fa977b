#![allow(dead_code)]

use courseplan::catalog::{Catalog, Course, Prereq};
use courseplan::plan::StudentState;
use courseplan::types::{Category, Term};

/// Builder for `Catalog` to simplify test setup. Courses keep insertion
/// order, which is the catalog order the scheduler sees.
pub struct CatalogBuilder {
    courses: Vec<Course>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self {
            courses: Vec::new(),
        }
    }

    pub fn with_course(mut self, course: Course) -> Self {
        self.courses.push(course);
        self
    }

    /// A default core course requiring every code in `prereqs`.
    pub fn with_core(self, code: &str, prereqs: &[&str]) -> Self {
        self.with_course(CourseBuilder::new(code).prereqs(prereqs).build())
    }

    /// A default elective with no prerequisites.
    pub fn with_elective(self, code: &str) -> Self {
        self.with_course(CourseBuilder::new(code).category(Category::Elective).build())
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn build(self) -> Catalog {
        Catalog::new(self.courses).expect("Failed to build valid catalog from builder")
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `Course`. Defaults: core category, 3 credits, difficulty 3,
/// workload 3, no prerequisites.
pub struct CourseBuilder {
    course: Course,
}

impl CourseBuilder {
    pub fn new(code: &str) -> Self {
        Self {
            course: Course::new(code, code, Category::Core),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.course.name = name.to_string();
        self
    }

    pub fn credits(mut self, credits: u32) -> Self {
        self.course.credits = credits;
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.course.category = category;
        self
    }

    pub fn difficulty(mut self, difficulty: u8) -> Self {
        self.course.difficulty = difficulty;
        self
    }

    /// Difficulty 4, the lowest "hard" level.
    pub fn hard(self) -> Self {
        self.difficulty(4)
    }

    pub fn workload(mut self, workload: u8) -> Self {
        self.course.workload = workload;
        self
    }

    /// Flat prerequisite list (all required).
    pub fn prereqs(mut self, codes: &[&str]) -> Self {
        self.course.prereqs = Prereq::all_of(codes);
        self
    }

    pub fn prereq_tree(mut self, tree: Prereq) -> Self {
        self.course.prereqs = tree;
        self
    }

    pub fn required(mut self, val: bool) -> Self {
        self.course.required = val;
        self
    }

    pub fn instructor(mut self, name: &str, rating: f32) -> Self {
        self.course.instructor = Some(name.to_string());
        self.course.instructor_rating = Some(rating);
        self
    }

    /// Restrict the course to these terms.
    pub fn offered(mut self, terms: &[Term]) -> Self {
        self.course.offered = terms.to_vec();
        self
    }

    pub fn build(self) -> Course {
        self.course
    }
}

/// Student state from literal code lists.
pub fn student(completed: &[&str], in_progress: &[&str]) -> StudentState {
    StudentState::new(completed, in_progress).expect("Failed to build valid student state")
}
