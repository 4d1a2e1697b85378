//! Static teaching content.
//!
//! Everything the walkthrough displays lives here: the bilingual lexicon
//! for interface chrome, the step sequences behind each explorer, the
//! candidate slates, and the fixed figures quoted on the vote pages. All
//! of it is constant data; nothing is derived at runtime.
//!
//! Some strings carry both languages inline ("候选人 A / Candidate A"),
//! matching how the vote pages present them regardless of the active
//! language. Concept pages switch wholesale between languages and use
//! [Text] pairs instead.

use crate::i18n::{Language, Lexicon, Node};

/// A string in both interface languages.
pub struct Text {
    pub zh: &'static str,
    pub en: &'static str,
}

impl Text {
    /// The variant for `language`.
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::Zh => self.zh,
            Language::En => self.en,
        }
    }
}

/// One stage in the transaction lifecycle walkthrough.
pub struct Stage {
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static str,
    pub duration: &'static str,
}

/// The four stages a transaction passes through on its way into a block.
pub const TRANSACTION_STAGES: &[Stage] = &[
    Stage {
        title: "Transaction Created",
        summary: "User signs transaction with their private key",
        details: "The wallet creates a transaction object containing recipient address, \
                  amount, gas parameters, and cryptographic signature.",
        duration: "< 1 second",
    },
    Stage {
        title: "Broadcast to Network",
        summary: "Transaction is sent to the mempool",
        details: "The signed transaction is propagated across peer-to-peer network nodes, \
                  waiting in the mempool for miners/validators to pick it up.",
        duration: "1-5 seconds",
    },
    Stage {
        title: "Validation & Mining",
        summary: "Miners/validators verify and include in block",
        details: "Network participants validate the transaction signature, check account \
                  balance, estimate gas, and compete to include it in the next block.",
        duration: "12-15 seconds (Ethereum)",
    },
    Stage {
        title: "Block Confirmation",
        summary: "Transaction is confirmed on-chain",
        details: "Once included in a block, the transaction receives confirmations as \
                  subsequent blocks are added, making it increasingly immutable.",
        duration: "~6 blocks for safety",
    },
];

/// A blockchain property explained on the intro page.
pub struct Concept {
    pub title: &'static str,
    pub summary: &'static str,
    pub points: &'static [&'static str],
}

pub const BLOCKCHAIN_CONCEPTS: &[Concept] = &[
    Concept {
        title: "Distributed Network",
        summary: "No single point of failure - transactions are verified by multiple nodes \
                  across the world",
        points: &[
            "Thousands of nodes worldwide",
            "Redundant verification process",
            "No central authority needed",
            "Censorship resistant",
        ],
    },
    Concept {
        title: "Immutable Records",
        summary: "Once confirmed, transactions cannot be altered or deleted - providing \
                  permanent audit trails",
        points: &[
            "Cryptographic hashing",
            "Chain of blocks linked together",
            "Historical data preserved",
            "Tamper-evident design",
        ],
    },
    Concept {
        title: "Public Transparency",
        summary: "All transactions are visible on the public ledger - anyone can verify the \
                  state",
        points: &[
            "Open transaction history",
            "Publicly verifiable",
            "Real-time monitoring",
            "Audit-friendly design",
        ],
    },
    Concept {
        title: "Consensus Mechanism",
        summary: "Network participants agree on transaction validity through cryptographic \
                  proofs",
        points: &[
            "Proof of Work (Bitcoin)",
            "Proof of Stake (Ethereum)",
            "Byzantine fault tolerance",
            "Democratic validation",
        ],
    },
];

/// A consensus mechanism compared on the intro page.
///
/// The metric fields score each mechanism from 0 to 100.
pub struct Mechanism {
    pub name: &'static str,
    pub summary: &'static str,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
    pub examples: &'static [&'static str],
    pub energy: u8,
    pub speed: u8,
    pub decentralization: u8,
    pub security: u8,
}

pub const CONSENSUS_MECHANISMS: &[Mechanism] = &[
    Mechanism {
        name: "Proof of Work (PoW)",
        summary: "Miners compete to solve cryptographic puzzles",
        pros: &[
            "Battle-tested security",
            "True decentralization",
            "Simple to understand",
        ],
        cons: &[
            "High energy consumption",
            "Slower transaction times",
            "Hardware intensive",
        ],
        examples: &["Bitcoin", "Ethereum (pre-merge)", "Litecoin"],
        energy: 20,
        speed: 40,
        decentralization: 90,
        security: 95,
    },
    Mechanism {
        name: "Proof of Stake (PoS)",
        summary: "Validators stake tokens to propose and validate blocks",
        pros: &[
            "Energy efficient",
            "Faster finality",
            "Lower barriers to entry",
        ],
        cons: &[
            "Nothing-at-stake problem",
            "Wealth concentration risk",
            "Less battle-tested",
        ],
        examples: &["Ethereum 2.0", "Cardano", "Polkadot"],
        energy: 95,
        speed: 75,
        decentralization: 70,
        security: 85,
    },
    Mechanism {
        name: "ZK Rollups",
        summary: "Layer 2 scaling using zero-knowledge proofs",
        pros: &["High throughput", "Low fees", "Ethereum security"],
        cons: &[
            "Complex implementation",
            "Centralized sequencers",
            "Emerging technology",
        ],
        examples: &["zkSync", "Starknet", "Polygon zkEVM"],
        energy: 98,
        speed: 95,
        decentralization: 60,
        security: 90,
    },
];

/// One field of an Ethereum transaction, with an example value.
pub struct TxField {
    pub name: &'static str,
    pub value: &'static str,
    pub description: &'static str,
    pub kind: &'static str,
}

pub const TRANSACTION_FIELDS: &[TxField] = &[
    TxField {
        name: "from",
        value: "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb",
        description: "Sender address (your wallet)",
        kind: "address",
    },
    TxField {
        name: "to",
        value: "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb",
        description: "Recipient address",
        kind: "address",
    },
    TxField {
        name: "value",
        value: "1000000000000000000",
        description: "Amount in wei (1 ETH = 10\u{00b9}\u{2078} wei)",
        kind: "uint256",
    },
    TxField {
        name: "gas",
        value: "21000",
        description: "Gas limit for execution",
        kind: "uint256",
    },
    TxField {
        name: "gasPrice",
        value: "20000000000",
        description: "Price per gas unit in wei",
        kind: "uint256",
    },
    TxField {
        name: "nonce",
        value: "42",
        description: "Transaction count from sender",
        kind: "uint256",
    },
    TxField {
        name: "data",
        value: "0x",
        description: "Optional data payload",
        kind: "bytes",
    },
    TxField {
        name: "v, r, s",
        value: "Signature components",
        description: "ECDSA signature proving authorization",
        kind: "signature",
    },
];

/// Example hash shown with the transaction structure.
pub const TRANSACTION_HASH: &str =
    "0x1a2b3c4d5e6f7g8h9i0j1k2l3m4n5o6p7q8r9s0t1u2v3w4x5y6z7a8b9c0d1e2f3";

/// Headers for the four intro page sections, in display order.
pub struct Section {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const INTRO_SECTIONS: &[Section] = &[
    Section {
        title: "Blockchain Fundamentals",
        subtitle: "Understanding these core concepts will help you appreciate why \
                   zero-knowledge proofs are revolutionary for blockchain privacy and \
                   scalability.",
    },
    Section {
        title: "Transaction Lifecycle",
        subtitle: "Follow the journey of a blockchain transaction from creation to final \
                   confirmation",
    },
    Section {
        title: "Transaction Structure",
        subtitle: "Every Ethereum transaction contains these essential fields",
    },
    Section {
        title: "Consensus Mechanisms",
        subtitle: "Different approaches to achieving agreement in distributed networks",
    },
];

pub const INTRO_TITLE: &str = "Understanding Blockchain Transactions";
pub const INTRO_SUBTITLE: &str =
    "Learn how blockchain transactions work from creation to confirmation. This \
     foundational knowledge will help you understand the benefits of zero-knowledge proofs.";

/// A labeled entry under a zero-knowledge topic.
pub struct Point {
    pub label: Text,
    pub body: Text,
}

/// One tab of the zero-knowledge concepts page.
pub struct Topic {
    pub title: Text,
    pub summary: Text,
    pub points: &'static [Point],
    pub note: Text,
}

pub const ZK_INTRO_TITLE: Text = Text {
    zh: "零知识证明：核心概念",
    en: "Zero-Knowledge Proofs: Core Concepts",
};

pub const ZK_INTRO_SUBTITLE: Text = Text {
    zh: "深入理解零知识证明的原理、特性和实现方式，为构建隐私保护的区块链应用打下基础。",
    en: "Deep dive into the principles, properties, and implementations of zero-knowledge \
         proofs to build privacy-preserving blockchain applications.",
};

pub const ZK_TOPICS: &[Topic] = &[
    Topic {
        title: Text {
            zh: "什么是零知识证明？",
            en: "What is Zero-Knowledge Proof?",
        },
        summary: Text {
            zh: "零知识证明（ZKP）是一种加密协议，允许证明者向验证者证明某个陈述是真实的，\
                 而无需透露除了该陈述真实性之外的任何信息。",
            en: "Zero-Knowledge Proof (ZKP) is a cryptographic protocol that allows a prover \
                 to demonstrate to a verifier that a statement is true without revealing any \
                 information beyond the validity of the statement itself.",
        },
        points: &[
            Point {
                label: Text { zh: "", en: "" },
                body: Text {
                    zh: "证明你知道密码，但不透露密码本身",
                    en: "Prove you know a password without revealing the password",
                },
            },
            Point {
                label: Text { zh: "", en: "" },
                body: Text {
                    zh: "证明你的年龄超过18岁，但不透露具体年龄",
                    en: "Prove your age is over 18 without revealing exact age",
                },
            },
            Point {
                label: Text { zh: "", en: "" },
                body: Text {
                    zh: "证明你投了某个候选人，但不透露是哪个候选人",
                    en: "Prove you voted for a candidate without revealing which one",
                },
            },
        ],
        note: Text {
            zh: "💡 关键点：零知识证明让我们能够在保护隐私的同时进行可信的验证，\
                 这在投票系统中至关重要。",
            en: "💡 Key Point: Zero-knowledge proofs enable trusted verification while \
                 protecting privacy, which is crucial in voting systems.",
        },
    },
    Topic {
        title: Text {
            zh: "ZKP 的三个性质",
            en: "Three Properties of ZKP",
        },
        summary: Text {
            zh: "一个有效的零知识证明系统必须满足三个关键性质：",
            en: "A valid zero-knowledge proof system must satisfy three key properties:",
        },
        points: &[
            Point {
                label: Text {
                    zh: "完整性 (Completeness)",
                    en: "Completeness",
                },
                body: Text {
                    zh: "如果陈述是真的，诚实的证明者总能说服诚实的验证者",
                    en: "If the statement is true, an honest prover can always convince an \
                         honest verifier",
                },
            },
            Point {
                label: Text {
                    zh: "可靠性 (Soundness)",
                    en: "Soundness",
                },
                body: Text {
                    zh: "如果陈述是假的，作弊的证明者只有很小的概率能欺骗验证者",
                    en: "If the statement is false, a cheating prover can only convince the \
                         verifier with negligible probability",
                },
            },
            Point {
                label: Text {
                    zh: "零知识性 (Zero-Knowledge)",
                    en: "Zero-Knowledge",
                },
                body: Text {
                    zh: "验证者除了知道陈述是真的之外，学不到任何其他信息",
                    en: "The verifier learns nothing other than the fact that the statement \
                         is true",
                },
            },
        ],
        note: Text {
            zh: "这三个性质确保了零知识证明系统既安全又实用。完整性保证了诚实的用户不会被拒绝，\
                 可靠性防止欺诈，零知识性保护了隐私。",
            en: "These three properties ensure that the zero-knowledge proof system is both \
                 secure and practical. Completeness ensures honest users are not rejected, \
                 soundness prevents fraud, and zero-knowledge protects privacy.",
        },
    },
    Topic {
        title: Text {
            zh: "ZK-SNARK 技术",
            en: "ZK-SNARK Technology",
        },
        summary: Text {
            zh: "ZK-SNARK（Zero-Knowledge Succinct Non-Interactive Argument of Knowledge）\
                 是最流行的零知识证明实现之一。",
            en: "ZK-SNARK (Zero-Knowledge Succinct Non-Interactive Argument of Knowledge) is \
                 one of the most popular zero-knowledge proof implementations.",
        },
        points: &[
            Point {
                label: Text {
                    zh: "Succinct（简洁）",
                    en: "Succinct",
                },
                body: Text {
                    zh: "证明大小很小，验证速度快",
                    en: "Proof size is small and verification is fast",
                },
            },
            Point {
                label: Text {
                    zh: "Non-Interactive（非交互）",
                    en: "Non-Interactive",
                },
                body: Text {
                    zh: "证明者和验证者不需要来回通信",
                    en: "No back-and-forth communication needed between prover and verifier",
                },
            },
            Point {
                label: Text {
                    zh: "Argument of Knowledge",
                    en: "Argument of Knowledge",
                },
                body: Text {
                    zh: "证明者必须真正\u{201c}知道\u{201d}秘密信息",
                    en: "Prover must actually \"know\" the secret information",
                },
            },
        ],
        note: Text {
            zh: "📊 ZK-SNARK 的优势\n✓ 证明大小固定且极小（几百字节）\n✓ 验证时间恒定（毫秒级）\n\
                 ✓ 适合区块链环境（低 Gas 费用）\n✓ 已被广泛应用（Zcash、Tornado Cash 等）",
            en: "📊 Advantages of ZK-SNARK\n✓ Fixed and minimal proof size (a few hundred \
                 bytes)\n✓ Constant verification time (milliseconds)\n✓ Suitable for \
                 blockchain (low gas costs)\n✓ Widely adopted (Zcash, Tornado Cash, etc.)",
        },
    },
    Topic {
        title: Text {
            zh: "Groth16 算法",
            en: "Groth16 Algorithm",
        },
        summary: Text {
            zh: "Groth16 是最高效的 ZK-SNARK 算法之一，广泛应用于区块链领域。",
            en: "Groth16 is one of the most efficient ZK-SNARK algorithms, widely used in \
                 blockchain.",
        },
        points: &[
            Point {
                label: Text {
                    zh: "1. 电路设计",
                    en: "1. Circuit Design",
                },
                body: Text {
                    zh: "将计算逻辑转换为算术电路（R1CS约束系统）",
                    en: "Convert computation logic to arithmetic circuit (R1CS constraint \
                         system)",
                },
            },
            Point {
                label: Text {
                    zh: "2. 可信设置",
                    en: "2. Trusted Setup",
                },
                body: Text {
                    zh: "生成证明密钥（Proving Key）和验证密钥（Verification Key）",
                    en: "Generate Proving Key and Verification Key",
                },
            },
            Point {
                label: Text {
                    zh: "3. 生成证明",
                    en: "3. Generate Proof",
                },
                body: Text {
                    zh: "使用私密输入和证明密钥生成零知识证明",
                    en: "Generate zero-knowledge proof using private input and proving key",
                },
            },
            Point {
                label: Text {
                    zh: "4. 验证证明",
                    en: "4. Verify Proof",
                },
                body: Text {
                    zh: "使用公开输入和验证密钥验证证明的有效性",
                    en: "Verify proof validity using public input and verification key",
                },
            },
        ],
        note: Text {
            zh: "⚠️ 可信设置的重要性：Groth16 需要进行\u{201c}可信设置\u{201d}仪式。\
                 如果设置过程中的秘密参数被泄露，整个系统的安全性将被破坏。因此，\
                 通常采用多方计算（MPC）来生成这些参数。\n💡 只要至少有一个参与者诚实地销毁了\
                 他们的秘密，整个系统就是安全的。",
            en: "⚠️ Importance of Trusted Setup: Groth16 requires a \"trusted setup\" \
                 ceremony. If the secret parameters from the setup are leaked, the entire \
                 system's security is compromised. Therefore, Multi-Party Computation (MPC) \
                 is typically used to generate these parameters.\n💡 As long as at least one \
                 participant honestly destroys their secret, the entire system remains \
                 secure.",
        },
    },
];

/// A candidate on the ballot, with the running tally shown beside it.
pub struct Candidate {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub votes: u64,
}

pub const CANDIDATES: &[Candidate] = &[
    Candidate {
        id: 1,
        name: "候选人 A / Candidate A",
        description: "主张提高社区福利 / Improve community welfare",
        votes: 45,
    },
    Candidate {
        id: 2,
        name: "候选人 B / Candidate B",
        description: "支持教育发展 / Support education development",
        votes: 38,
    },
    Candidate {
        id: 3,
        name: "候选人 C / Candidate C",
        description: "推动环保政策 / Promote environmental policies",
        votes: 27,
    },
];

/// A privacy shortcoming of plain on-chain voting.
pub struct Limitation {
    pub title: &'static str,
    pub problem: &'static str,
    pub impact: &'static str,
}

pub const LIMITATIONS: &[Limitation] = &[
    Limitation {
        title: "缺乏隐私 / Lack of Privacy",
        problem: "所有人都能看到你投给了哪个候选人 / Everyone can see who you voted for",
        impact: "可能导致投票者受到压力、贿赂或报复 / May lead to voter coercion, bribery, \
                 or retaliation",
    },
    Limitation {
        title: "投票关联 / Vote Linkability",
        problem: "投票与你的钱包地址永久关联 / Votes are permanently linked to your wallet \
                  address",
        impact: "无法实现真正的匿名投票 / True anonymous voting is impossible",
    },
    Limitation {
        title: "链上数据永久存储 / Permanent On-Chain Storage",
        problem: "投票数据永久保存在区块链上 / Voting data is permanently stored on \
                  blockchain",
        impact: "即使多年后也能追溯到你的投票选择 / Your vote choices can be traced even \
                 years later",
    },
];

/// A step of the zero-knowledge proof workflow strip.
pub struct WorkflowStep {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const ZK_WORKFLOW: &[WorkflowStep] = &[
    WorkflowStep {
        icon: "🗳️",
        title: "选择候选人 / Select Candidate",
        description: "私密地选择你的候选人 / Privately select your candidate",
    },
    WorkflowStep {
        icon: "⚡",
        title: "生成电路输入 / Generate Circuit Input",
        description: "将选择转换为电路约束 / Convert choice to circuit constraints",
    },
    WorkflowStep {
        icon: "🔐",
        title: "生成 ZK 证明 / Generate ZK Proof",
        description: "使用 Groth16 算法生成证明 / Generate proof using Groth16",
    },
    WorkflowStep {
        icon: "✓",
        title: "链上验证 / On-Chain Verification",
        description: "智能合约验证证明有效性 / Smart contract verifies proof",
    },
];

/// A row of the voting method comparison table.
pub struct ComparisonRow {
    pub feature: &'static str,
    pub traditional: &'static str,
    pub zero_knowledge: &'static str,
}

pub const METHOD_COMPARISON: &[ComparisonRow] = &[
    ComparisonRow {
        feature: "投票隐私 / Vote Privacy",
        traditional: "❌ 公开 / Public",
        zero_knowledge: "✅ 私密 / Private",
    },
    ComparisonRow {
        feature: "结果可验证 / Result Verifiable",
        traditional: "✅ 是 / Yes",
        zero_knowledge: "✅ 是 / Yes",
    },
    ComparisonRow {
        feature: "防止作弊 / Fraud Prevention",
        traditional: "⚠️ 中等 / Medium",
        zero_knowledge: "✅ 高 / High",
    },
    ComparisonRow {
        feature: "抗胁迫性 / Coercion Resistant",
        traditional: "❌ 否 / No",
        zero_knowledge: "✅ 是 / Yes",
    },
    ComparisonRow {
        feature: "Gas 成本 / Gas Cost",
        traditional: "💰 ~0.002 ETH",
        zero_knowledge: "💰 ~0.001 ETH",
    },
    ComparisonRow {
        feature: "验证速度 / Verification Speed",
        traditional: "⚡ 快 / Fast",
        zero_knowledge: "⚡ 很快 / Very Fast",
    },
];

/// A home page learning path step. Titles and summaries resolve through the
/// lexicon so they follow the active language.
pub struct PathStep {
    pub title_key: &'static str,
    pub summary_key: &'static str,
    pub duration: &'static str,
    pub level: &'static str,
    pub topics: &'static [&'static str],
}

pub const LEARNING_PATH: &[PathStep] = &[
    PathStep {
        title_key: "learningPath.step1.title",
        summary_key: "learningPath.step1.description",
        duration: "15 min",
        level: "Beginner",
        topics: &[
            "Transaction lifecycle",
            "Gas & fees",
            "Consensus mechanisms",
            "Block structure",
        ],
    },
    PathStep {
        title_key: "learningPath.step2.title",
        summary_key: "learningPath.step2.description",
        duration: "20 min",
        level: "Intermediate",
        topics: &[
            "ZK properties",
            "Groth16 protocol",
            "Circuit design",
            "Proof systems",
        ],
    },
    PathStep {
        title_key: "learningPath.step3.title",
        summary_key: "learningPath.step3.description",
        duration: "10 min",
        level: "Beginner",
        topics: &[
            "Wallet connection",
            "Smart contracts",
            "Transaction signing",
            "Gas estimation",
        ],
    },
    PathStep {
        title_key: "learningPath.step4.title",
        summary_key: "learningPath.step4.description",
        duration: "25 min",
        level: "Advanced",
        topics: &[
            "Semaphore protocol",
            "Merkle trees",
            "Nullifier hashes",
            "Circuit proving",
        ],
    },
    PathStep {
        title_key: "learningPath.step5.title",
        summary_key: "learningPath.step5.description",
        duration: "10 min",
        level: "Beginner",
        topics: &[
            "Data visualization",
            "Privacy comparison",
            "Performance metrics",
            "Use cases",
        ],
    },
];

/// Home page feature cards as (title, description) lexicon keys.
pub const FEATURES: &[(&str, &str)] = &[
    ("features.privacy.title", "features.privacy.description"),
    ("features.verifiable.title", "features.verifiable.description"),
    (
        "features.decentralized.title",
        "features.decentralized.description",
    ),
    (
        "features.transparent.title",
        "features.transparent.description",
    ),
];

/// Page headers for the vote pages, shown in both languages at once.
pub const VOTE_TITLE: &str = "传统链上投票 / Traditional On-Chain Voting";
pub const VOTE_SUBTITLE: &str = "体验标准的区块链投票系统，了解它的优势和局限性 / Experience \
                                 standard blockchain voting and understand its advantages and \
                                 limitations";
pub const ZK_VOTE_TITLE: &str = "零知识证明投票 / ZK-SNARK Voting";
pub const ZK_VOTE_SUBTITLE: &str = "使用 Groth16 零知识证明进行私密投票，保护你的选择隐私 / Use \
                                    Groth16 zero-knowledge proofs for private voting, \
                                    protecting your choice privacy";
pub const RESULTS_TITLE: &str = "投票结果 / Voting Results";
pub const RESULTS_SUBTITLE: &str = "查看实时投票统计和数据分析 / View real-time voting \
                                    statistics and data analysis";

/// Fixed figures quoted on the vote pages.
pub const BLOCK_HEIGHT: &str = "#12,345,678";
pub const VOTE_GAS: &str = "0.002 ETH (~$6)";
pub const PROOF_GAS: &str = "~0.001 ETH (~$3)";
pub const PROOF_SAVINGS: &str = "比传统投票节省 50% / 50% cheaper than traditional voting";

/// The interface lexicon, one table per language.
pub fn lexicon() -> Lexicon {
    Lexicon::new(&ZH, &EN)
}

const ZH: Node = Node::Branch(&[
    (
        "nav",
        Node::Branch(&[
            ("home", Node::Leaf("首页")),
            ("blockchainIntro", Node::Leaf("区块链介绍")),
            ("zkConcepts", Node::Leaf("ZK 概念")),
            ("traditionalVote", Node::Leaf("传统投票")),
            ("zkVote", Node::Leaf("ZK 投票")),
            ("results", Node::Leaf("结果")),
            ("connect", Node::Leaf("连接钱包")),
            ("disconnect", Node::Leaf("断开连接")),
        ]),
    ),
    (
        "hero",
        Node::Branch(&[
            ("title", Node::Leaf("我的第一次 ZK 投票")),
            ("subtitle", Node::Leaf("通过零知识证明探索匿名投票的未来")),
            (
                "description",
                Node::Leaf(
                    "学习区块链基础、理解零知识证明，并亲身体验如何在保护隐私的同时进行透明投票。",
                ),
            ),
            ("getStarted", Node::Leaf("开始学习")),
            ("learnMore", Node::Leaf("了解更多")),
        ]),
    ),
    (
        "features",
        Node::Branch(&[
            ("title", Node::Leaf("为什么选择 ZK 投票？")),
            ("subtitle", Node::Leaf("探索零知识证明在投票系统中的优势")),
            (
                "privacy",
                Node::Branch(&[
                    ("title", Node::Leaf("完全隐私")),
                    (
                        "description",
                        Node::Leaf("使用零知识证明保护您的投票选择，同时保持透明度"),
                    ),
                ]),
            ),
            (
                "verifiable",
                Node::Branch(&[
                    ("title", Node::Leaf("可验证性")),
                    (
                        "description",
                        Node::Leaf("任何人都可以验证投票结果的正确性，无需透露个人投票"),
                    ),
                ]),
            ),
            (
                "decentralized",
                Node::Branch(&[
                    ("title", Node::Leaf("去中心化")),
                    (
                        "description",
                        Node::Leaf("建立在以太坊上，没有中心化的权威机构控制投票过程"),
                    ),
                ]),
            ),
            (
                "transparent",
                Node::Branch(&[
                    ("title", Node::Leaf("透明公开")),
                    (
                        "description",
                        Node::Leaf("所有投票记录在区块链上公开可见，确保投票公正"),
                    ),
                ]),
            ),
        ]),
    ),
    (
        "learningPath",
        Node::Branch(&[
            ("title", Node::Leaf("您的学习之旅")),
            ("subtitle", Node::Leaf("循序渐进地掌握 ZK 投票技术")),
            (
                "step1",
                Node::Branch(&[
                    ("title", Node::Leaf("区块链基础")),
                    (
                        "description",
                        Node::Leaf("了解区块链、交易和智能合约的基本概念"),
                    ),
                ]),
            ),
            (
                "step2",
                Node::Branch(&[
                    ("title", Node::Leaf("ZK 证明概念")),
                    (
                        "description",
                        Node::Leaf("学习零知识证明如何实现隐私保护的验证"),
                    ),
                ]),
            ),
            (
                "step3",
                Node::Branch(&[
                    ("title", Node::Leaf("传统投票")),
                    (
                        "description",
                        Node::Leaf("体验标准的链上投票系统及其局限性"),
                    ),
                ]),
            ),
            (
                "step4",
                Node::Branch(&[
                    ("title", Node::Leaf("ZK 投票")),
                    ("description", Node::Leaf("使用零知识证明进行私密投票")),
                ]),
            ),
            (
                "step5",
                Node::Branch(&[
                    ("title", Node::Leaf("结果分析")),
                    (
                        "description",
                        Node::Leaf("查看投票结果和区块链数据的可视化"),
                    ),
                ]),
            ),
        ]),
    ),
    (
        "techStack",
        Node::Branch(&[
            ("title", Node::Leaf("技术栈")),
            ("subtitle", Node::Leaf("构建现代 ZK 投票系统的工具")),
            ("blockchain", Node::Leaf("区块链")),
            ("zkProofs", Node::Leaf("ZK 证明")),
            ("frontend", Node::Leaf("前端开发")),
        ]),
    ),
    (
        "footer",
        Node::Branch(&[
            (
                "description",
                Node::Leaf("一个教育平台，帮助您理解和体验零知识证明投票系统。"),
            ),
            ("quickLinks", Node::Leaf("快速链接")),
            ("resources", Node::Leaf("资源")),
            ("documentation", Node::Leaf("文档")),
            ("tutorials", Node::Leaf("教程")),
            ("github", Node::Leaf("GitHub")),
            ("community", Node::Leaf("社区")),
            ("discord", Node::Leaf("Discord")),
            ("twitter", Node::Leaf("Twitter")),
            ("forum", Node::Leaf("论坛")),
            ("rights", Node::Leaf("版权所有")),
        ]),
    ),
]);

const EN: Node = Node::Branch(&[
    (
        "nav",
        Node::Branch(&[
            ("home", Node::Leaf("Home")),
            ("blockchainIntro", Node::Leaf("Blockchain Intro")),
            ("zkConcepts", Node::Leaf("ZK Concepts")),
            ("traditionalVote", Node::Leaf("Traditional Vote")),
            ("zkVote", Node::Leaf("ZK Vote")),
            ("results", Node::Leaf("Results")),
            ("connect", Node::Leaf("Connect Wallet")),
            ("disconnect", Node::Leaf("Disconnect")),
        ]),
    ),
    (
        "hero",
        Node::Branch(&[
            ("title", Node::Leaf("My First ZK Vote")),
            (
                "subtitle",
                Node::Leaf("Explore the Future of Anonymous Voting with Zero-Knowledge Proofs"),
            ),
            (
                "description",
                Node::Leaf(
                    "Learn blockchain fundamentals, understand zero-knowledge proofs, and \
                     experience firsthand how to vote transparently while protecting privacy.",
                ),
            ),
            ("getStarted", Node::Leaf("Get Started")),
            ("learnMore", Node::Leaf("Learn More")),
        ]),
    ),
    (
        "features",
        Node::Branch(&[
            ("title", Node::Leaf("Why ZK Voting?")),
            (
                "subtitle",
                Node::Leaf("Discover the advantages of zero-knowledge proofs in voting systems"),
            ),
            (
                "privacy",
                Node::Branch(&[
                    ("title", Node::Leaf("Complete Privacy")),
                    (
                        "description",
                        Node::Leaf(
                            "Protect your vote choice using zero-knowledge proofs while \
                             maintaining transparency",
                        ),
                    ),
                ]),
            ),
            (
                "verifiable",
                Node::Branch(&[
                    ("title", Node::Leaf("Verifiability")),
                    (
                        "description",
                        Node::Leaf(
                            "Anyone can verify the correctness of voting results without \
                             revealing individual votes",
                        ),
                    ),
                ]),
            ),
            (
                "decentralized",
                Node::Branch(&[
                    ("title", Node::Leaf("Decentralized")),
                    (
                        "description",
                        Node::Leaf(
                            "Built on Ethereum, no centralized authority controls the voting \
                             process",
                        ),
                    ),
                ]),
            ),
            (
                "transparent",
                Node::Branch(&[
                    ("title", Node::Leaf("Transparent")),
                    (
                        "description",
                        Node::Leaf(
                            "All voting records are publicly visible on the blockchain, \
                             ensuring fair voting",
                        ),
                    ),
                ]),
            ),
        ]),
    ),
    (
        "learningPath",
        Node::Branch(&[
            ("title", Node::Leaf("Your Learning Journey")),
            ("subtitle", Node::Leaf("Master ZK voting technology step by step")),
            (
                "step1",
                Node::Branch(&[
                    ("title", Node::Leaf("Blockchain Basics")),
                    (
                        "description",
                        Node::Leaf(
                            "Understand the fundamental concepts of blockchain, transactions, \
                             and smart contracts",
                        ),
                    ),
                ]),
            ),
            (
                "step2",
                Node::Branch(&[
                    ("title", Node::Leaf("ZK Proof Concepts")),
                    (
                        "description",
                        Node::Leaf(
                            "Learn how zero-knowledge proofs enable privacy-preserving \
                             verification",
                        ),
                    ),
                ]),
            ),
            (
                "step3",
                Node::Branch(&[
                    ("title", Node::Leaf("Traditional Voting")),
                    (
                        "description",
                        Node::Leaf(
                            "Experience standard on-chain voting systems and their limitations",
                        ),
                    ),
                ]),
            ),
            (
                "step4",
                Node::Branch(&[
                    ("title", Node::Leaf("ZK Voting")),
                    (
                        "description",
                        Node::Leaf("Cast private votes using zero-knowledge proofs"),
                    ),
                ]),
            ),
            (
                "step5",
                Node::Branch(&[
                    ("title", Node::Leaf("Results Analysis")),
                    (
                        "description",
                        Node::Leaf("View voting results and blockchain data visualizations"),
                    ),
                ]),
            ),
        ]),
    ),
    (
        "techStack",
        Node::Branch(&[
            ("title", Node::Leaf("Technology Stack")),
            (
                "subtitle",
                Node::Leaf("Tools for building modern ZK voting systems"),
            ),
            ("blockchain", Node::Leaf("Blockchain")),
            ("zkProofs", Node::Leaf("ZK Proofs")),
            ("frontend", Node::Leaf("Frontend")),
        ]),
    ),
    (
        "footer",
        Node::Branch(&[
            (
                "description",
                Node::Leaf(
                    "An educational platform to help you understand and experience \
                     zero-knowledge proof voting systems.",
                ),
            ),
            ("quickLinks", Node::Leaf("Quick Links")),
            ("resources", Node::Leaf("Resources")),
            ("documentation", Node::Leaf("Documentation")),
            ("tutorials", Node::Leaf("Tutorials")),
            ("github", Node::Leaf("GitHub")),
            ("community", Node::Leaf("Community")),
            ("discord", Node::Leaf("Discord")),
            ("twitter", Node::Leaf("Twitter")),
            ("forum", Node::Leaf("Forum")),
            ("rights", Node::Leaf("All rights reserved")),
        ]),
    ),
]);
