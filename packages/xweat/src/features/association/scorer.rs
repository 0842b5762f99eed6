//! Association scorer

use crate::features::similarity::SimilarityMatrix;

/// Per-word, per-group and differential association over a similarity matrix
///
/// Word and group arguments are vocabulary indices.
#[derive(Debug, Clone, Copy)]
pub struct AssociationScorer<'a> {
    sims: &'a SimilarityMatrix,
}

impl<'a> AssociationScorer<'a> {
    pub fn new(sims: &'a SimilarityMatrix) -> Self {
        Self { sims }
    }

    /// `s(w, A, B)`: mean similarity of `w` to `a` minus mean similarity to `b`
    pub fn association(&self, w: usize, a: &[usize], b: &[usize]) -> f64 {
        self.mean_similarity(w, a) - self.mean_similarity(w, b)
    }

    /// `s(w, A, B)` for every word of `words`, in order
    pub fn associations(&self, words: &[usize], a: &[usize], b: &[usize]) -> Vec<f64> {
        words.iter().map(|&w| self.association(w, a, b)).collect()
    }

    /// Raw WEAT test statistic
    pub fn differential_association(
        &self,
        t1: &[usize],
        t2: &[usize],
        a1: &[usize],
        a2: &[usize],
    ) -> f64 {
        let sum_1: f64 = self.associations(t1, a1, a2).iter().sum();
        let sum_2: f64 = self.associations(t2, a1, a2).iter().sum();
        sum_1 - sum_2
    }

    /// Normalized effect size.
    ///
    /// Returns 0.0 when every target word has the same association (σ = 0):
    /// the mean difference is then zero as well and there is no effect.
    pub fn effect_size(&self, t1: &[usize], t2: &[usize], a1: &[usize], a2: &[usize]) -> f64 {
        let s1 = self.associations(t1, a1, a2);
        let s2 = self.associations(t2, a1, a2);

        let pooled: Vec<f64> = s1.iter().chain(s2.iter()).copied().collect();
        let std = population_std(&pooled);
        if std == 0.0 {
            return 0.0;
        }

        (mean(&s1) - mean(&s2)) / std
    }

    fn mean_similarity(&self, w: usize, group: &[usize]) -> f64 {
        let row = self.sims.row(w);
        group.iter().map(|&g| row[g]).sum::<f64>() / group.len() as f64
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by N, not N − 1)
pub fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::Matrix;

    /// 0,1 = targets X; 2,3 = targets Y; 4 = attribute A; 5 = attribute B
    fn sims() -> SimilarityMatrix {
        #[rustfmt::skip]
        let data = vec![
            1.0, 0.8, 0.1, 0.2, 0.9, 0.1,
            0.8, 1.0, 0.2, 0.1, 0.7, 0.3,
            0.1, 0.2, 1.0, 0.9, 0.2, 0.8,
            0.2, 0.1, 0.9, 1.0, 0.1, 0.6,
            0.9, 0.7, 0.2, 0.1, 1.0, 0.0,
            0.1, 0.3, 0.8, 0.6, 0.0, 1.0,
        ];
        SimilarityMatrix::new(Matrix::from_vec(6, 6, data))
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_association_is_lookup_difference() {
        let sims = sims();
        let scorer = AssociationScorer::new(&sims);
        assert!(close(scorer.association(0, &[4], &[5]), 0.8));
        assert!(close(scorer.association(2, &[4], &[5]), -0.6));
        // mean over groups
        assert!(close(scorer.association(0, &[4, 1], &[5, 2]), (0.9 + 0.8) / 2.0 - 0.1));
    }

    #[test]
    fn test_differential_association() {
        let sims = sims();
        let scorer = AssociationScorer::new(&sims);
        // X: 0.8 + 0.4, Y: -0.6 + -0.5
        let stat = scorer.differential_association(&[0, 1], &[2, 3], &[4], &[5]);
        assert!(close(stat, 1.2 + 1.1));
    }

    #[test]
    fn test_identical_groups_have_zero_statistic() {
        let sims = sims();
        let scorer = AssociationScorer::new(&sims);
        assert_eq!(scorer.differential_association(&[0, 2], &[0, 2], &[4], &[5]), 0.0);
    }

    #[test]
    fn test_effect_size_hand_computed() {
        let sims = sims();
        let scorer = AssociationScorer::new(&sims);
        let values = [0.8, 0.4, -0.6, -0.5];
        let expected = (0.6 - (-0.55)) / population_std(&values);
        let d = scorer.effect_size(&[0, 1], &[2, 3], &[4], &[5]);
        assert!(close(d, expected));
        assert!(close(scorer.effect_size(&[2, 3], &[0, 1], &[4], &[5]), -expected));
    }

    #[test]
    fn test_effect_size_zero_variance() {
        let sims = sims();
        let scorer = AssociationScorer::new(&sims);
        assert_eq!(scorer.effect_size(&[0], &[0], &[4], &[5]), 0.0);
    }

    #[test]
    fn test_population_std() {
        assert!(close(population_std(&[1.0, 3.0]), 1.0));
        assert!(close(population_std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), 2.0));
        assert_eq!(population_std(&[]), 0.0);
    }
}
