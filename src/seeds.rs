//! Built-in scenario content and the shared learning points.
//!
//! All of it is compiled in; the catalog is built from these functions once.

use crate::domain::{Choice, Scenario, ScenarioId};

/// Learning points attached to every verdict, regardless of scenario.
pub const LEARNING_POINTS: [&str; 3] = [
  "クライアント関係を長期的に構築する",
  "契約書と見積もりを明確にする",
  "スコープ管理の重要性を理解する",
];

/// The three trouble scenarios, in selection-screen order.
pub fn seed_scenarios() -> Vec<Scenario> {
  vec![scope_creep(), payment_delay(), spec_change()]
}

fn scope_creep() -> Scenario {
  Scenario {
    id: ScenarioId::ScopeCreep,
    title: "スコープクリープ: 機能要件の段階的追加",
    description: "契約後、クライアントから次々と新しい機能要望が出ています。",
    situation: "契約内容: 企業サイトのリニューアル（5ページ、基本的なCMS機能）\n\
納期: 6週間\n\
予算: ¥600,000\n\
\n\
現在の進捗: 3週間経過、デザインと基本実装が完了\n\
\n\
クライアントからのメール:\n\
「いい感じですね！ところで、以下の機能も追加できませんか？\n\
- 多言語対応（英語、中国語）\n\
- 会員登録・ログイン機能\n\
- ブログシステムの拡張\n\
- SNS連携\n\
\n\
納期は変わらずで大丈夫ですよね？」",
    choices: vec![
      Choice {
        key: "accept-immediately",
        text: "「かしこまりました。納期内に対応します」と即座に承諾する",
        score: 20,
        feedback: "❌ 危険です。スコープ追加で納期超過・品質低下のリスク大。",
        best_practice: "スコープ追加は必ず見積もり・納期変更の相談を。",
      },
      Choice {
        key: "quote-and-extend",
        text: "「それぞれの機能について見積もりを提示し、追加料金と納期延長を提案する」",
        score: 95,
        feedback: "✅ 正解です。プロフェッショナルな対応。",
        best_practice: "スコープ追加は新規案件として扱い、明確に見積もる。",
      },
      Choice {
        key: "prioritize-partial",
        text: "「すべての機能は対応できませんが、優先順位をつけて一部対応します」と交渉する",
        score: 70,
        feedback: "△ 部分的に正解。ただし、見積もり提示がないと後で問題に。",
        best_practice: "部分対応でも、追加料金と納期変更は明示する。",
      },
    ],
  }
}

fn payment_delay() -> Scenario {
  Scenario {
    id: ScenarioId::PaymentDelay,
    title: "支払い遅延: クライアントからの支払いが遅れている",
    description: "納品から2週間、支払期限を過ぎても入金がありません。",
    situation: "契約内容: ECサイト構築\n\
納期: 2024年12月15日（完了）\n\
支払期限: 2025年1月15日\n\
請求額: ¥1,200,000\n\
\n\
現在の状況: 2025年1月20日、まだ入金なし\n\
\n\
クライアントからのメール:\n\
「お疲れ様です。サイトの動作確認をしていたところ、\n\
いくつか不具合が見つかったので、修正してから支払います。\n\
修正は無料でお願いします。」\n\
\n\
※ 契約書では「納品後の軽微な修正は無料」と記載",
    choices: vec![
      Choice {
        key: "fix-free-then-wait",
        text: "「不具合の修正は無料で対応します」と承諾し、修正後に支払いを待つ",
        score: 30,
        feedback: "❌ 支払い遅延の言い訳に使われる可能性。修正内容を確認すべき。",
        best_practice: "不具合の内容を確認し、軽微か重大かを判断する。",
      },
      Choice {
        key: "confirm-then-50percent",
        text: "「不具合の詳細を確認してから対応を判断します。また、支払期限を過ぎているため、先に請求額の50%をお支払いください」と提案する",
        score: 85,
        feedback: "✅ 良い対応。支払いと修正を分離し、キャッシュフローを守る。",
        best_practice: "支払いと修正は別問題。期限内の支払いは契約義務。",
      },
      Choice {
        key: "demand-fix-first",
        text: "「契約書に軽微な修正は無料と書いてあるので、修正してから支払ってください」と強く要求する",
        score: 50,
        feedback: "△ 正当性はあるが、クライアント関係が悪化する可能性。",
        best_practice: "法的に正しくても、ビジネス関係を考慮した対応を。",
      },
    ],
  }
}

fn spec_change() -> Scenario {
  Scenario {
    id: ScenarioId::SpecChange,
    title: "仕様変更: 納品後に大幅な仕様変更を要求される",
    description: "納品したサイトについて、クライアントから大幅な変更要求が来ました。",
    situation: "契約内容: ポートフォリオサイト構築\n\
納期: 2025年1月10日（完了）\n\
請求額: ¥300,000\n\
支払期限: 2025年1月31日\n\
\n\
現在の状況: 納品から1週間\n\
\n\
クライアントからのメール:\n\
「サイトを見ていたら、デザインがイメージと違いました。\n\
以下の変更をお願いします：\n\
- カラースキームの全面変更\n\
- レイアウトの大幅変更\n\
- 画像素材の全て差し替え\n\
- アニメーション効果の追加\n\
\n\
これくらいは修正範囲ですよね？」\n\
\n\
※ 納品前に3回のデザイン確認があり、クライアントが承認済み",
    choices: vec![
      Choice {
        key: "cite-approval",
        text: "「デザイン確認時に承認いただいたので、大幅な変更は追加料金が必要です」と提示する",
        score: 90,
        feedback: "✅ 最適な対応。契約と承認履歴を根拠に説明。",
        best_practice: "承認プロセスを記録し、その後の変更は追加料金化する。",
      },
      Choice {
        key: "quote-change-fee",
        text: "「修正対応しますが、追加料金は¥150,000です」と見積もりを提示する",
        score: 85,
        feedback: "✅ 良い対応。ただし、契約書の確認が重要。",
        best_practice: "変更内容を明確にして、見積もりを提示する。",
      },
      Choice {
        key: "accept-all-changes",
        text: "「すべての変更に対応します」と承諾する",
        score: 20,
        feedback: "❌ 危険です。無限の修正要求に応じることになる可能性。",
        best_practice: "納品後の大幅変更は新規案件として扱う。",
      },
    ],
  }
}
