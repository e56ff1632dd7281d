use crate::bench::{Algorithm, AuxSpace, Strategy};
use crate::cmp::Compare;
use crate::sort::{self, tree};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// One dataset record. `total` is derived once at load time and never
/// changes afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Student {
    pub id: u32,
    pub name: String,
    pub gender: char,
    pub korean: u32,
    pub english: u32,
    pub math: u32,
    pub total: u32,
}

impl Student {
    pub fn new(id: u32, name: &str, gender: char, korean: u32, english: u32, math: u32) -> Student {
        Student {
            id,
            name: name.to_string(),
            gender,
            korean,
            english,
            math,
            total: korean + english + math,
        }
    }
}

#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Parse { line: usize, reason: String },
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read dataset: {}", e),
            LoadError::Parse { line, reason } => write!(f, "line {}: {}", line, reason),
            LoadError::Empty => write!(f, "dataset contains no records"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> LoadError {
        LoadError::Io(e)
    }
}

/// Load students from CSV with columns id, name, gender, korean, english,
/// math. The first line is a header and is skipped. An empty dataset is a
/// load failure, not an empty Vec.
pub fn load_students<R: BufRead>(reader: R) -> Result<Vec<Student>, LoadError> {
    let mut students = Vec::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if lineno == 0 {
            continue;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        students.push(parse_line(line, lineno + 1)?);
    }

    if students.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(students)
}

pub fn load_students_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Student>, LoadError> {
    load_students(BufReader::new(File::open(path)?))
}

fn parse_line(line: &str, lineno: usize) -> Result<Student, LoadError> {
    let mut fields = line.split(',').map(str::trim);

    let id = next_field(&mut fields, lineno, "id")?
        .parse::<u32>()
        .map_err(|_| parse_err(lineno, "invalid id"))?;
    let name = next_field(&mut fields, lineno, "name")?;
    let gender = next_field(&mut fields, lineno, "gender")?
        .chars()
        .next()
        .ok_or_else(|| parse_err(lineno, "empty gender"))?;
    let korean = grade(&mut fields, lineno, "korean")?;
    let english = grade(&mut fields, lineno, "english")?;
    let math = grade(&mut fields, lineno, "math")?;

    Ok(Student::new(id, name, gender, korean, english, math))
}

fn parse_err(line: usize, reason: &str) -> LoadError {
    LoadError::Parse {
        line,
        reason: reason.to_string(),
    }
}

fn next_field<'l, I>(fields: &mut I, line: usize, what: &str) -> Result<&'l str, LoadError>
where
    I: Iterator<Item = &'l str>,
{
    match fields.next() {
        Some(field) if !field.is_empty() => Ok(field),
        _ => Err(parse_err(line, &format!("missing {}", what))),
    }
}

fn grade<'l, I>(fields: &mut I, line: usize, what: &str) -> Result<u32, LoadError>
where
    I: Iterator<Item = &'l str>,
{
    next_field(fields, line, what)?
        .parse()
        .map_err(|_| parse_err(line, &format!("invalid {}", what)))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SortField {
    Id,
    Name,
    Gender,
    Total,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Comparator over one student field. Counts one comparison per field
/// looked at, including the total-grade tie-break fields.
pub struct StudentCmp {
    field: SortField,
    order: SortOrder,
    count: u64,
}

impl StudentCmp {
    pub fn new(field: SortField, order: SortOrder) -> StudentCmp {
        StudentCmp {
            field,
            order,
            count: 0,
        }
    }

    fn directed(&self, ord: Ordering) -> Ordering {
        match self.order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    }

    // korean, then english, then math; the higher grade wins the tie in
    // both the ascending and the descending total order
    fn grade_tiebreak(&mut self, a: &Student, b: &Student) -> Ordering {
        self.count += 1;
        if a.korean != b.korean {
            return b.korean.cmp(&a.korean);
        }

        self.count += 1;
        if a.english != b.english {
            return b.english.cmp(&a.english);
        }

        self.count += 1;
        b.math.cmp(&a.math)
    }
}

impl Compare<Student> for StudentCmp {
    fn compare(&mut self, a: &Student, b: &Student) -> Ordering {
        self.count += 1;

        match self.field {
            SortField::Id => self.directed(a.id.cmp(&b.id)),
            SortField::Name => self.directed(a.name.cmp(&b.name)),
            SortField::Gender => self.directed(a.gender.cmp(&b.gender)),
            SortField::Total => match a.total.cmp(&b.total) {
                Ordering::Equal => self.grade_tiebreak(a, b),
                ord => self.directed(ord),
            },
        }
    }

    fn comparisons(&self) -> u64 {
        self.count
    }

    fn reset(&mut self) {
        self.count = 0;
    }
}

/// Radix sort keyed on the student id. Ignores the comparator.
pub fn radix_sort_id(arr: &mut [Student], _cmp: &mut StudentCmp) {
    sort::radix_sort_by(arr, |s| s.id);
}

type StudentAlgorithm = Algorithm<Student, StudentCmp>;

fn comparison_sort(
    name: &'static str,
    run: fn(&mut [Student], &mut StudentCmp),
    stable: bool,
    aux: AuxSpace,
) -> StudentAlgorithm {
    Algorithm {
        name,
        run,
        stable,
        comparison_based: true,
        unique_keys_only: false,
        integer_key_only: false,
        aux,
    }
}

fn tree_sort(name: &'static str, run: fn(&mut [Student], &mut StudentCmp)) -> StudentAlgorithm {
    Algorithm {
        name,
        run,
        stable: false,
        comparison_based: true,
        unique_keys_only: true,
        integer_key_only: false,
        aux: AuxSpace::TreeNodes {
            node_bytes: tree::node_footprint::<Student>(),
        },
    }
}

/// The fixed benchmark table: every (algorithm, criterion) pair the
/// exercise measures, with the declared key properties per run.
pub fn benchmark_suite() -> Vec<Strategy<Student, StudentCmp>> {
    use SortField::*;
    use SortOrder::*;

    let bubble = comparison_sort("Bubble Sort", sort::bubble_sort, true, AuxSpace::InPlace);
    let selection = comparison_sort(
        "Selection Sort",
        sort::selection_sort,
        false,
        AuxSpace::InPlace,
    );
    let insertion = comparison_sort(
        "Insertion Sort",
        sort::insertion_sort,
        true,
        AuxSpace::InPlace,
    );
    let shell_basic = comparison_sort(
        "Shell Sort (Basic)",
        sort::shell_sort_basic,
        false,
        AuxSpace::InPlace,
    );
    let shell_knuth = comparison_sort(
        "Shell Sort (Improved)",
        sort::shell_sort_knuth,
        false,
        AuxSpace::InPlace,
    );
    let quick_basic = comparison_sort(
        "Quick Sort (Basic)",
        sort::quick_sort_basic,
        false,
        AuxSpace::InPlace,
    );
    let quick_median = comparison_sort(
        "Quick Sort (Improved)",
        sort::quick_sort_median,
        false,
        AuxSpace::InPlace,
    );
    let merge = comparison_sort("Merge Sort", sort::merge_sort, true, AuxSpace::ScratchBuffer);

    let heap = Algorithm {
        name: "Heap Sort",
        run: sort::heap_sort,
        stable: false,
        comparison_based: true,
        unique_keys_only: true,
        integer_key_only: false,
        aux: AuxSpace::InPlace,
    };
    let radix = Algorithm {
        name: "Radix Sort (ID)",
        run: radix_sort_id,
        stable: true,
        comparison_based: false,
        unique_keys_only: false,
        integer_key_only: true,
        aux: AuxSpace::ScratchBuffer,
    };
    let tree_basic = tree_sort("Tree Sort (Basic)", tree::tree_sort_basic);
    let tree_avl = tree_sort("AVL Tree Sort (Improved)", tree::tree_sort_avl);

    let entry = |algorithm: StudentAlgorithm,
                 field: SortField,
                 order: SortOrder,
                 comparator_name: &'static str,
                 duplicate_keys: bool,
                 integer_key: bool,
                 stable_only: bool| Strategy {
        algorithm,
        comparator: StudentCmp::new(field, order),
        comparator_name,
        duplicate_keys,
        integer_key,
        stable_only,
    };

    // id is unique and an integer; name, gender and total all duplicate
    let id_asc = |a| entry(a, Id, Ascending, "ID Ascending", false, true, false);
    let name_asc = |a| entry(a, Name, Ascending, "NAME Ascending", true, false, false);
    let gender_asc = |a| {
        entry(
            a,
            Gender,
            Ascending,
            "GENDER Ascending (Stable)",
            true,
            false,
            true,
        )
    };
    let total_desc = |a| entry(a, Total, Descending, "TOTAL Descending", true, false, false);

    let mut suite = vec![
        id_asc(bubble),
        id_asc(selection),
        id_asc(insertion),
        id_asc(shell_basic),
        id_asc(quick_basic),
        id_asc(heap),
        id_asc(merge),
        id_asc(radix),
        id_asc(tree_basic),
        name_asc(bubble),
        name_asc(selection),
        name_asc(insertion),
        name_asc(shell_basic),
        name_asc(quick_basic),
        name_asc(merge),
        gender_asc(bubble),
        gender_asc(insertion),
        gender_asc(merge),
        total_desc(bubble),
        total_desc(selection),
        total_desc(insertion),
        total_desc(shell_basic),
        total_desc(quick_basic),
        total_desc(merge),
    ];

    // basic vs improved pairs, all on the unique integer key
    suite.push(entry(
        shell_basic,
        Id,
        Ascending,
        "ID Ascending (Basic)",
        false,
        true,
        false,
    ));
    suite.push(entry(
        shell_knuth,
        Id,
        Ascending,
        "ID Ascending (Improved)",
        false,
        true,
        false,
    ));
    suite.push(entry(
        quick_basic,
        Id,
        Ascending,
        "ID Ascending (Basic)",
        false,
        true,
        false,
    ));
    suite.push(entry(
        quick_median,
        Id,
        Ascending,
        "ID Ascending (Improved)",
        false,
        true,
        false,
    ));
    suite.push(entry(
        tree_basic,
        Id,
        Ascending,
        "ID Ascending (Basic)",
        false,
        true,
        false,
    ));
    suite.push(entry(
        tree_avl,
        Id,
        Ascending,
        "ID Ascending (Improved)",
        false,
        true,
        false,
    ));

    suite
}
