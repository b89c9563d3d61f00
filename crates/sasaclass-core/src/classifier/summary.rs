use super::Classifier;
use super::error::ClassifierError;
use std::ops::{Add, AddAssign};
use tracing::instrument;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Per-class area totals accumulated through a [`Classifier`].
///
/// Totals are indexed by class and labelled with the classifier's class names.
/// Atoms the classifier does not cover are summed into a separate
/// unclassified bucket instead of being dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassAreas {
    labels: Vec<String>,
    totals: Vec<f64>,
    unclassified: f64,
}

impl ClassAreas {
    /// Empty totals with one zeroed slot per class of `classifier`.
    pub fn new<C: Classifier + ?Sized>(classifier: &C) -> Result<Self, ClassifierError> {
        let labels = (0..classifier.class_count())
            .map(|class| classifier.class_name(class).map(str::to_string))
            .collect::<Result<Vec<_>, _>>()?;
        let totals = vec![0.0; labels.len()];
        Ok(Self {
            labels,
            totals,
            unclassified: 0.0,
        })
    }

    #[instrument(skip_all, name = "class_areas_collect")]
    pub fn collect<C, I, R, A>(classifier: &C, records: I) -> Result<Self, ClassifierError>
    where
        C: Classifier + ?Sized,
        I: IntoIterator<Item = (R, A, f64)>,
        R: AsRef<str>,
        A: AsRef<str>,
    {
        let mut areas = Self::new(classifier)?;
        for (residue, atom, area) in records {
            areas.add_area(classifier, residue.as_ref(), atom.as_ref(), area);
        }
        Ok(areas)
    }

    #[cfg(feature = "parallel")]
    #[instrument(skip_all, name = "class_areas_par_collect")]
    pub fn par_collect<C, R, A>(
        classifier: &C,
        records: &[(R, A, f64)],
    ) -> Result<Self, ClassifierError>
    where
        C: Classifier + ?Sized,
        R: AsRef<str> + Sync,
        A: AsRef<str> + Sync,
    {
        let empty = Self::new(classifier)?;
        Ok(records
            .par_iter()
            .fold(
                || empty.clone(),
                |mut acc, (residue, atom, area)| {
                    acc.add_area(classifier, residue.as_ref(), atom.as_ref(), *area);
                    acc
                },
            )
            .reduce(|| empty.clone(), |a, b| a + b))
    }

    /// Adds one atom's area to the class it belongs to.
    pub fn add_area<C: Classifier + ?Sized>(
        &mut self,
        classifier: &C,
        residue: &str,
        atom: &str,
        area: f64,
    ) {
        match classifier
            .classify(residue, atom)
            .and_then(|class| self.totals.get_mut(class))
        {
            Some(total) => *total += area,
            None => self.unclassified += area,
        }
    }

    /// Sum over all classes, excluding the unclassified bucket.
    #[inline]
    pub fn total(&self) -> f64 {
        self.totals.iter().sum()
    }

    #[inline]
    pub fn unclassified(&self) -> f64 {
        self.unclassified
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| self.totals[i])
    }

    pub fn by_index(&self, class: usize) -> Option<f64> {
        self.totals.get(class).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.totals.iter().copied())
    }
}

impl Add for ClassAreas {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign for ClassAreas {
    // Classes are matched by label; unseen labels are appended.
    fn add_assign(&mut self, rhs: Self) {
        for (label, total) in rhs.labels.into_iter().zip(rhs.totals) {
            match self.labels.iter().position(|l| *l == label) {
                Some(i) => self.totals[i] += total,
                None => {
                    self.labels.push(label);
                    self.totals.push(total);
                }
            }
        }
        self.unclassified += rhs.unclassified;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{ResidueClassifier, TableClassifier};

    fn records() -> Vec<(&'static str, &'static str, f64)> {
        vec![
            ("ALA", "CB", 10.0),
            ("ALA", "O", 4.0),
            ("HOH", "O", 2.5),
            ("ALA", "ZZ", 1.0),
            ("GLY", "CA", 3.0),
        ]
    }

    #[test]
    fn new_has_one_zeroed_slot_per_class() {
        let classifier = TableClassifier::protor().unwrap();
        let areas = ClassAreas::new(&classifier).unwrap();
        let collected: Vec<_> = areas.iter().collect();
        assert_eq!(
            collected,
            vec![("Apolar", 0.0), ("Polar", 0.0), ("Water", 0.0)]
        );
        assert_eq!(areas.total(), 0.0);
    }

    #[test]
    fn collect_sums_areas_per_class_and_tracks_misses() {
        let classifier = TableClassifier::protor().unwrap();
        let areas = ClassAreas::collect(&classifier, records()).unwrap();
        assert_eq!(areas.get("Apolar"), Some(13.0));
        assert_eq!(areas.get("Polar"), Some(4.0));
        assert_eq!(areas.get("Water"), Some(2.5));
        assert_eq!(areas.get("Charged"), None);
        assert_eq!(areas.unclassified(), 1.0);
        assert_eq!(areas.total(), 19.5);
        assert_eq!(areas.by_index(0), Some(13.0));
    }

    #[test]
    fn collect_works_through_trait_objects() {
        let classifier: Box<dyn Classifier> = Box::new(ResidueClassifier);
        let areas = ClassAreas::collect(classifier.as_ref(), records()).unwrap();
        assert_eq!(areas.get("ALA"), Some(15.0));
        assert_eq!(areas.get("HOH"), Some(2.5));
        assert_eq!(areas.get("GLY"), Some(3.0));
        assert_eq!(areas.unclassified(), 0.0);
    }

    #[test]
    fn add_assign_merges_totals_by_label() {
        let classifier = TableClassifier::protor().unwrap();
        let mut a = ClassAreas::collect(&classifier, [("ALA", "CB", 1.0)]).unwrap();
        let b = ClassAreas::collect(&classifier, [("ALA", "O", 2.0), ("ALA", "XX", 0.5)]).unwrap();
        a += b;
        assert_eq!(a.get("Apolar"), Some(1.0));
        assert_eq!(a.get("Polar"), Some(2.0));
        assert_eq!(a.unclassified(), 0.5);
    }

    #[test]
    fn add_appends_labels_missing_from_left_side() {
        let left = ClassAreas::collect(&ResidueClassifier, [("ALA", "CA", 1.0)]).unwrap();
        let protor = TableClassifier::protor().unwrap();
        let right = ClassAreas::collect(&protor, [("ALA", "CB", 2.0)]).unwrap();
        let merged = left + right;
        assert_eq!(merged.get("ALA"), Some(1.0));
        assert_eq!(merged.get("Apolar"), Some(2.0));
        assert_eq!(merged.total(), 3.0);
    }

    #[test]
    fn default_is_empty() {
        let areas = ClassAreas::default();
        assert_eq!(areas.iter().count(), 0);
        assert_eq!(areas.total(), 0.0);
        assert_eq!(areas.unclassified(), 0.0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn par_collect_matches_sequential_collect() {
        let classifier = TableClassifier::oons().unwrap();
        let data: Vec<(String, String, f64)> = (0..500u32)
            .flat_map(|i| {
                let area = f64::from(i % 7) * 0.5;
                [
                    ("ALA".to_string(), "CB".to_string(), area),
                    ("SER".to_string(), "OG".to_string(), area),
                    ("XYZ".to_string(), "CA".to_string(), area),
                    ("XYZ".to_string(), "QQ".to_string(), area),
                ]
            })
            .collect();
        let sequential =
            ClassAreas::collect(&classifier, data.iter().map(|(r, a, x)| (r, a, *x))).unwrap();
        let parallel = ClassAreas::par_collect(&classifier, &data).unwrap();
        for ((label, seq), (_, par)) in sequential.iter().zip(parallel.iter()) {
            assert!((seq - par).abs() < 1e-9, "{label}: {seq} vs {par}");
        }
        assert!((sequential.unclassified() - parallel.unclassified()).abs() < 1e-9);
    }
}
